//! Fixed-width table rendering for the record store.

use crate::types::Student;

/// Shown instead of a table when there is nothing to list.
pub const EMPTY_NOTICE: &str = "Student Record System is empty...\n";

const TITLE: &str = "Student Record System";

/// Width of the id column.
const ID_WIDTH: usize = 15;
/// Width of the name column.
const NAME_WIDTH: usize = 70;
/// Width between the outer bars: id, name, five grade characters and the
/// two inner bars.
const INNER_WIDTH: usize = ID_WIDTH + NAME_WIDTH + 5 + 2;

/// Render `students` as the bordered record table.
///
/// Rows appear in iteration order. An empty input renders [`EMPTY_NOTICE`]
/// and nothing else.
pub fn render<'a, I>(students: I) -> String
where
    I: IntoIterator<Item = &'a Student>,
{
    let mut rows = students.into_iter().peekable();
    if rows.peek().is_none() {
        return EMPTY_NOTICE.to_string();
    }

    let separator = format!("|{}|\n", "-".repeat(INNER_WIDTH));
    let mut out = String::new();

    out.push_str(&format!(" {}\n", "_".repeat(INNER_WIDTH)));
    out.push_str(&format!("|{}|\n", centered(TITLE, INNER_WIDTH)));
    out.push_str(&separator);
    out.push_str(&format!(
        "|{:<id_w$}|{:<name_w$}|Grade|\n",
        "ID",
        "Name",
        id_w = ID_WIDTH,
        name_w = NAME_WIDTH
    ));
    out.push_str(&separator);

    for student in rows {
        out.push_str(&format!(
            "|{:<id_w$}|{:<name_w$}|{}|\n",
            student.id,
            student.name,
            two_decimals(student.grade),
            id_w = ID_WIDTH,
            name_w = NAME_WIDTH
        ));
    }

    out.push_str(&format!(" {}\n", "-".repeat(INNER_WIDTH)));
    out
}

/// Format `value` with two decimals, rounding ties away from zero.
///
/// Rounding works on the shortest decimal that represents the `f64`, so a
/// grade stored as `82.125` shows as `82.13` rather than the `82.12` that
/// `{:.2}` gives.
fn two_decimals(value: f64) -> String {
    if !value.is_finite() {
        return format!("{:.2}", value);
    }

    let text = value.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - 2;
    let negative = value.is_sign_negative() && digits.iter().any(|&d| d != b'0');
    let int_digits: String = digits[..split].iter().map(|&d| d as char).collect();
    let frac_digits: String = digits[split..].iter().map(|&d| d as char).collect();

    format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        int_digits,
        frac_digits
    )
}

/// Center `text` in `width` columns, leaning left when the padding is odd.
fn centered(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.len());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}
