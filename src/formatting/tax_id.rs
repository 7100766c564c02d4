use super::phone::digits_only;

const CPF_LEN: usize = 11;
const CNPJ_LEN: usize = 14;

/// Mask a Brazilian tax id as the user types it.
///
/// Up to 11 digits use the CPF shape `000.000.000-00`; 12 to 14 digits use
/// the CNPJ shape `00.000.000/0000-00`. Extra digits are dropped.
pub fn format_tax_id(input: &str) -> String {
    let digits = digits_only(input, CNPJ_LEN);

    if digits.len() <= CPF_LEN {
        mask(&digits, &[3, 3, 3, 2], &['.', '.', '-'])
    } else {
        mask(&digits, &[2, 3, 3, 4, 2], &['.', '.', '/', '-'])
    }
}

/// Strip the mask, keeping at most 14 digits
pub fn unformat_tax_id(input: &str) -> String {
    digits_only(input, CNPJ_LEN)
}

pub fn is_cpf(input: &str) -> bool {
    unformat_tax_id(input).len() == CPF_LEN
}

pub fn is_cnpj(input: &str) -> bool {
    unformat_tax_id(input).len() == CNPJ_LEN
}

fn mask(digits: &str, groups: &[usize], separators: &[char]) -> String {
    let mut out = String::with_capacity(digits.len() + separators.len());
    let mut rest = digits;

    for (i, size) in groups.iter().enumerate() {
        if rest.is_empty() {
            break;
        }
        if i > 0 {
            out.push(separators[i - 1]);
        }
        let take = (*size).min(rest.len());
        out.push_str(&rest[..take]);
        rest = &rest[take..];
    }

    out
}
