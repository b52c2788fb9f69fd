//! Channel mode tokenizing.

use crate::error::ModeParseError;

use super::{takes_argument, ModeDelta, ModeSign};

/// Decode the parameters of a channel `MODE` message into deltas.
///
/// `pieces[0]` is the mode string (`+ov-k`) and the remaining pieces are its
/// parameters, consumed left to right by the letters that take one. A letter
/// whose parameter is missing gets `None`; surplus parameters are ignored.
pub fn decode_channel_modes(pieces: &[&str]) -> Result<Vec<ModeDelta>, ModeParseError> {
    let mut res = vec![];

    let Some((first, rest)) = pieces.split_first() else {
        return Ok(res);
    };

    let mut modes = first.chars();
    let mut args = rest.iter().copied();

    let mut cur_sign = match modes.next() {
        Some(c) => ModeSign::from_char(c)
            .ok_or_else(|| ModeParseError::MissingModeModifier(first.to_string()))?,
        None => return Ok(res),
    };
    let mut dangling = true;

    for c in modes {
        if let Some(sign) = ModeSign::from_char(c) {
            cur_sign = sign;
            dangling = true;
            continue;
        }

        let argument = if takes_argument(cur_sign, c) {
            args.next().map(str::to_owned)
        } else {
            None
        };
        res.push(ModeDelta {
            sign: cur_sign,
            letter: c,
            argument,
        });
        dangling = false;
    }

    if dangling {
        return Err(ModeParseError::DanglingModifier {
            modifier: cur_sign.as_char(),
        });
    }

    Ok(res)
}
