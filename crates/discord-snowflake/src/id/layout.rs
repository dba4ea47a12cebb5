use super::Snowflake;
use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

/// One bit field of a packed ID, as rendered by the `Debug` table.
pub(super) struct FieldLayout {
    pub(super) name: &'static str,
    pub(super) bits: u8,
    pub(super) value: u64,
}

fn center(s: impl ToString, width: usize) -> String {
    let s = s.to_string();
    let len = s.len();
    if len >= width {
        return s;
    }
    let pad = width - len;
    let left = pad / 2;
    let right = pad - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

fn write_border(f: &mut fmt::Formatter<'_>, columns: &[usize]) -> fmt::Result {
    write!(f, "        +")?;
    for &w in columns {
        write!(f, "{}+", "-".repeat(w))?;
    }
    writeln!(f)
}

fn write_row<T: ToString>(
    f: &mut fmt::Formatter<'_>,
    cells: impl Iterator<Item = T>,
    columns: &[usize],
) -> fmt::Result {
    write!(f, "        |")?;
    for (cell, &w) in cells.zip(columns) {
        write!(f, "{}|", center(cell, w))?;
    }
    writeln!(f)
}

/// Renders the raw value and a per-field table of an ID.
///
/// ```text
/// Snowflake {
///     raw id     : 0x0271065ac1020007 (175928847299117063)
///     padded     : 00175928847299117063
///     unix ms    : 1462015105796
///     layout     :
///         +----------------+---------------+----------------+----------------+
///         | timestamp (42) | worker_id (5) | process_id (5) | increment (12) |
///         ...
/// }
/// ```
pub(super) fn write_bit_layout_debug(f: &mut fmt::Formatter<'_>, id: &Snowflake) -> fmt::Result {
    let fields = id.fields();

    // Widest of label, decimal and hex, plus one space either side
    let columns: Vec<usize> = fields
        .iter()
        .map(|field| {
            let label_len = format!("{} ({})", field.name, field.bits).len();
            let dec_len = field.value.to_string().len();
            let hex_len = format!("0x{:x}", field.value).len();
            label_len.max(dec_len).max(hex_len) + 2
        })
        .collect();

    writeln!(f, "Snowflake {{")?;
    writeln!(f, "    raw id     : 0x{:016x} ({})", id.to_raw(), id.to_raw())?;
    writeln!(f, "    padded     : {}", id.to_padded_string())?;
    writeln!(f, "    unix ms    : {}", id.unix())?;
    writeln!(f, "    layout     :")?;

    write_border(f, &columns)?;
    write_row(
        f,
        fields.iter().map(|field| format!("{} ({})", field.name, field.bits)),
        &columns,
    )?;
    write_border(f, &columns)?;
    write_row(f, fields.iter().map(|field| field.value), &columns)?;
    write_row(
        f,
        fields.iter().map(|field| format!("0x{:x}", field.value)),
        &columns,
    )?;
    write_border(f, &columns)?;

    write!(f, "}}")
}
