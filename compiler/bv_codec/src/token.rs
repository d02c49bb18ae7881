//! Token-level decoding and encoding.

use bv_ir::{Atom, BinaryOp, UnaryOp, VarId};
use num_bigint::{BigInt, Sign};

use crate::base94::{decode_integer, decode_string, encode_integer, encode_string};
use crate::{CodecError, CodecResult};

/// Tag byte of string-literal tokens.
pub const STRING_TAG: char = 'S';

/// Decode a single token.
///
/// Dispatch is on the first byte only; `T`, `F` and `?` ignore any trailing
/// payload.
pub fn decode_token(token: &str) -> CodecResult<Atom> {
    let Some((&tag, payload)) = token.as_bytes().split_first() else {
        return Err(CodecError::UnknownToken {
            token: String::new(),
        });
    };

    match tag {
        b'T' => Ok(Atom::Bool(true)),
        b'F' => Ok(Atom::Bool(false)),
        b'I' => Ok(Atom::Int(BigInt::from(decode_integer(payload)?))),
        b'S' => Ok(Atom::Str(decode_string(payload)?)),
        b'U' => {
            let symbol = &token[1..];
            UnaryOp::from_symbol(symbol)
                .map(Atom::Unary)
                .ok_or_else(|| unknown_operator("unary", symbol, token))
        }
        b'B' => {
            let symbol = &token[1..];
            BinaryOp::from_symbol(symbol)
                .map(Atom::Binary)
                .ok_or_else(|| unknown_operator("binary", symbol, token))
        }
        b'?' => Ok(Atom::If),
        b'L' => Ok(Atom::Lambda(VarId::new(decode_integer(payload)?))),
        b'v' => Ok(Atom::Var(VarId::new(decode_integer(payload)?))),
        _ => Err(CodecError::UnknownToken {
            token: token.to_string(),
        }),
    }
}

fn unknown_operator(arity: &'static str, symbol: &str, token: &str) -> CodecError {
    CodecError::UnknownOperator {
        arity,
        symbol: symbol.to_string(),
        token: token.to_string(),
    }
}

/// Decode a whole message into its atom stream.
pub fn tokenize(message: &str) -> CodecResult<Vec<Atom>> {
    message.split_ascii_whitespace().map(decode_token).collect()
}

/// Encode one atom as wire text.
///
/// Integer tokens carry magnitudes only, so a negative integer is written as
/// the two tokens `U- I<magnitude>`.
pub fn encode_atom(atom: &Atom) -> CodecResult<String> {
    let token = match atom {
        Atom::Bool(true) => "T".to_string(),
        Atom::Bool(false) => "F".to_string(),
        Atom::Int(i) => {
            let (sign, magnitude) = (i.sign(), i.magnitude());
            let digits = encode_integer(magnitude);
            if sign == Sign::Minus {
                format!("U{} I{digits}", UnaryOp::Neg.as_symbol())
            } else {
                format!("I{digits}")
            }
        }
        Atom::Str(s) => format!("{STRING_TAG}{}", encode_string(s)?),
        Atom::Unary(op) => format!("U{}", op.as_symbol()),
        Atom::Binary(op) => format!("B{}", op.as_symbol()),
        Atom::If => "?".to_string(),
        Atom::Lambda(id) => format!("L{}", encode_integer(id.value())),
        Atom::Var(id) => format!("v{}", encode_integer(id.value())),
    };
    Ok(token)
}

/// Encode an atom stream as a single-line message.
pub fn encode_atoms(atoms: &[Atom]) -> CodecResult<String> {
    let tokens = atoms
        .iter()
        .map(encode_atom)
        .collect::<CodecResult<Vec<_>>>()?;
    Ok(tokens.join(" "))
}

/// Wrap outgoing text as a single string-literal token.
pub fn encode_string_as_message(text: &str) -> CodecResult<String> {
    Ok(format!("{STRING_TAG}{}", encode_string(text)?))
}
