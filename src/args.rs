//! Positional-argument parsing for the variadic invocation surface
//! (`delta, max_triangles, potential, p0..p5`), as a loosely-typed host
//! binding would receive it (e.g. a flat token list from a CLI or an FFI
//! boundary). The typed [`crate::discretize`] entry point does not need
//! this — it is here so [`crate::error::DiscretizeError::NotEnoughParameters`]
//! has somewhere to be exercised and tested on its own terms.

use crate::error::DiscretizeError;

/// A parsed, not-yet-validated-against-the-registry set of arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedArgs {
    pub delta: f64,
    pub max_triangles: i32,
    pub potential: String,
    pub params: Vec<f64>,
}

/// Parse `delta, max_triangles, potential, p0..p5` from a flat token
/// list. Fewer than three tokens is [`DiscretizeError::NotEnoughParameters`];
/// a token that fails to parse as the expected numeric type is reported
/// the same way, since the original invocation surface has no separate
/// "malformed argument" error kind.
pub fn parse_positional(tokens: &[String]) -> Result<ParsedArgs, DiscretizeError> {
    if tokens.len() < 3 {
        return Err(DiscretizeError::NotEnoughParameters);
    }
    let delta: f64 = tokens[0]
        .parse()
        .map_err(|_| DiscretizeError::NotEnoughParameters)?;
    let max_triangles: i32 = tokens[1]
        .parse()
        .map_err(|_| DiscretizeError::NotEnoughParameters)?;
    let potential = tokens[2].clone();
    let params = tokens[3..]
        .iter()
        .map(|t| t.parse::<f64>().map_err(|_| DiscretizeError::NotEnoughParameters))
        .collect::<Result<Vec<f64>, _>>()?;
    Ok(ParsedArgs {
        delta,
        max_triangles,
        potential,
        params,
    })
}
