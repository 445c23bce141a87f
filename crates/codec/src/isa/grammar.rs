//! Operand grammar.
//!
//! Splits one instruction line into its mnemonic and raw operand tokens, and
//! parses numeric literals. Operands are separated by commas and/or
//! whitespace; the last operand may be written `offset(base)`, where an empty
//! offset means `0`. Nothing here knows about registers or descriptors
//! beyond their operand roles.

use crate::common::error::CodecError;
use crate::isa::format::{Role, Syntax};

/// Raw operand tokens of one instruction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperandList {
    /// Tokens in written order; an `offset(base)` operand contributes the
    /// offset then the base.
    pub tokens: Vec<String>,
    /// `true` when the last two tokens came from `offset(base)`.
    pub memory: bool,
}

fn syntax(token: &str, reason: &str) -> CodecError {
    CodecError::Syntax { token: token.to_string(), reason: reason.to_string() }
}

/// Splits a line into its lowercased mnemonic and the remaining operand text.
///
/// Returns `None` for a blank line.
pub fn split_mnemonic(line: &str) -> Option<(String, &str)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (mnemonic, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    Some((mnemonic.to_ascii_lowercase(), rest.trim()))
}

/// Tokenizes operand text.
///
/// # Errors
///
/// [`CodecError::Syntax`] for empty operands, unbalanced parentheses, text
/// after `)` and a memory operand that is not last.
pub fn tokenize(text: &str) -> Result<OperandList, CodecError> {
    let text = text.trim();
    let mut list = OperandList::default();
    if text.is_empty() {
        return Ok(list);
    }
    let pieces: Vec<&str> = text.split(',').map(str::trim).collect();
    let last = pieces.len() - 1;
    for (i, piece) in pieces.iter().enumerate() {
        if piece.is_empty() {
            return Err(syntax(text, "empty operand"));
        }
        if list.memory {
            return Err(syntax(piece, "memory operand must be the last operand"));
        }
        let Some(open) = piece.find('(') else {
            if piece.contains(')') {
                return Err(syntax(piece, "unbalanced parenthesis"));
            }
            list.tokens.extend(piece.split_whitespace().map(str::to_string));
            continue;
        };
        if i != last {
            return Err(syntax(piece, "memory operand must be the last operand"));
        }
        let close = piece.find(')').ok_or_else(|| syntax(piece, "unbalanced parenthesis"))?;
        if close < open || piece[open + 1..].contains('(') || piece[close + 1..].contains(')') {
            return Err(syntax(piece, "unbalanced parenthesis"));
        }
        if !piece[close + 1..].trim().is_empty() {
            return Err(syntax(piece, "unexpected text after ')'"));
        }
        let base = piece[open + 1..close].trim();
        if base.is_empty() || base.contains(char::is_whitespace) {
            return Err(syntax(piece, "expected a single base register inside parentheses"));
        }
        // The offset is the word directly before '('; earlier words are operands.
        let prefix = piece[..open].trim_end();
        let (before, offset) = match prefix.char_indices().rev().find(|(_, c)| c.is_whitespace()) {
            Some((at, c)) => (&prefix[..at], &prefix[at + c.len_utf8()..]),
            None => ("", prefix),
        };
        list.tokens.extend(before.split_whitespace().map(str::to_string));
        list.tokens.push(if offset.is_empty() { "0".to_string() } else { offset.to_string() });
        list.tokens.push(base.to_string());
        list.memory = true;
    }
    Ok(list)
}

/// Orders tokens to match `roles`.
///
/// Memory-syntax instructions accept both `dst, off(base)` and the plain
/// `dst, base, off`; the result is always in role order (offset before base).
/// A trailing `rm` role may be omitted, in which case one token fewer is
/// returned.
///
/// # Errors
///
/// [`CodecError::MalformedOperands`] on an arity mismatch or an
/// `offset(base)` operand given to an instruction that takes none.
pub fn arrange(list: OperandList, mnemonic: &str, roles: &[Role], syntax: Syntax) -> Result<Vec<String>, CodecError> {
    let malformed = |detail: String| CodecError::MalformedOperands { mnemonic: mnemonic.to_string(), detail };
    let OperandList { mut tokens, memory } = list;
    if memory && syntax != Syntax::Memory {
        return Err(malformed("does not take an offset(base) operand".to_string()));
    }
    let optional_rm = roles.last() == Some(&Role::Rm) && tokens.len() + 1 == roles.len();
    if tokens.len() != roles.len() && !optional_rm {
        let names: Vec<&str> = roles.iter().map(|r| r.name()).collect();
        return Err(malformed(format!(
            "expected {} operand{} ({}), found {}",
            roles.len(),
            if roles.len() == 1 { "" } else { "s" },
            names.join(", "),
            tokens.len()
        )));
    }
    if syntax == Syntax::Memory && !memory {
        let n = tokens.len();
        tokens.swap(n - 2, n - 1);
    }
    Ok(tokens)
}

/// Parses a decimal or `0x`-prefixed hex literal, optionally signed.
///
/// # Errors
///
/// [`CodecError::Syntax`] when the token is not a literal or does not fit
/// in 64 bits.
pub fn parse_immediate(token: &str) -> Result<i64, CodecError> {
    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let (radix, digits) = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, body),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(syntax(token, "expected a decimal or 0x-prefixed hex immediate"));
    }
    let magnitude = u64::from_str_radix(digits, radix).map_err(|_| syntax(token, "immediate does not fit in 64 bits"))?;
    let value = if negative { -i128::from(magnitude) } else { i128::from(magnitude) };
    i64::try_from(value).map_err(|_| syntax(token, "immediate does not fit in 64 bits"))
}
