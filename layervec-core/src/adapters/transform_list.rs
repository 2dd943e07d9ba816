//! SVG-style transform lists: `translate(..) rotate(..) scale(..) matrix(..)`.

use crate::{
    adapters::{GradientAdapter, SourceFrame, sweep_rotation_for},
    foundation::core::{Affine, Vec2},
    foundation::error::ParseError,
    layer::model::{ColorStop, GradientDescriptor, GradientFamily},
    paint::color::parse_color,
    transform::affine::{self, from_coeffs, rotate_deg},
};

#[derive(Debug, Clone, PartialEq)]
struct Call {
    name: String,
    offset: usize,
    args: Vec<f64>,
}

/// Parse and fold a transform list into one matrix.
///
/// Calls are folded left to right by post-multiplication starting from identity. Arguments may
/// be separated by commas and/or whitespace; calls may be separated by whitespace or commas. An
/// empty (or all-whitespace) list is the identity.
pub fn parse_transform_list(input: &str) -> Result<Affine, ParseError> {
    let calls = lex_calls(input)?;
    let mut steps = Vec::with_capacity(calls.len());
    for call in &calls {
        steps.push(call_to_affine(call)?);
    }
    Ok(affine::fold(steps))
}

fn call_to_affine(call: &Call) -> Result<Affine, ParseError> {
    let args = call.args.as_slice();
    let arg_count = |expected: &'static str| ParseError::ArgCount {
        name: call.name.clone(),
        expected,
        got: args.len(),
    };

    let m = match call.name.as_str() {
        "matrix" => match args {
            [a, b, c, d, e, f] => from_coeffs(*a, *b, *c, *d, *e, *f),
            _ => return Err(arg_count("6")),
        },
        "translate" => match args {
            [tx] => Affine::translate(Vec2::new(*tx, 0.0)),
            [tx, ty] => Affine::translate(Vec2::new(*tx, *ty)),
            _ => return Err(arg_count("1 or 2")),
        },
        "scale" => match args {
            [s] => Affine::scale(*s),
            [sx, sy] => Affine::scale_non_uniform(*sx, *sy),
            _ => return Err(arg_count("1 or 2")),
        },
        "rotate" => match args {
            [deg] => rotate_deg(*deg),
            [deg, cx, cy] => {
                let pivot = Vec2::new(*cx, *cy);
                affine::fold([
                    Affine::translate(pivot),
                    rotate_deg(*deg),
                    Affine::translate(-pivot),
                ])
            }
            _ => return Err(arg_count("1 or 3")),
        },
        "skewX" => match args {
            [deg] => from_coeffs(1.0, 0.0, deg.to_radians().tan(), 1.0, 0.0, 0.0),
            _ => return Err(arg_count("1")),
        },
        "skewY" => match args {
            [deg] => from_coeffs(1.0, deg.to_radians().tan(), 0.0, 1.0, 0.0, 0.0),
            _ => return Err(arg_count("1")),
        },
        _ => {
            return Err(ParseError::UnknownFunction {
                name: call.name.clone(),
                offset: call.offset,
            });
        }
    };

    if affine::is_finite(m) {
        Ok(m)
    } else {
        Err(ParseError::NonFinite("transform list"))
    }
}

fn lex_calls(input: &str) -> Result<Vec<Call>, ParseError> {
    let bytes = input.as_bytes();
    let mut out = Vec::new();
    let mut i = 0usize;

    loop {
        while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b',') {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
            i += 1;
        }
        if start == i {
            return Err(ParseError::syntax(i, "expected a transform function name"));
        }
        let name = input[start..i].to_owned();

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || bytes[i] != b'(' {
            return Err(ParseError::syntax(i, format!("expected '(' after '{name}'")));
        }
        i += 1;

        let mut args = Vec::new();
        loop {
            while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b',') {
                i += 1;
            }
            if i >= bytes.len() {
                return Err(ParseError::syntax(i, format!("unterminated '{name}(' call")));
            }
            if bytes[i] == b')' {
                i += 1;
                break;
            }
            let (v, next) = lex_number(input, i)?;
            args.push(v);
            i = next;
        }

        out.push(Call {
            name,
            offset: start,
            args,
        });
    }

    Ok(out)
}

// Number: [+-]?([0-9]+(.[0-9]*)?|.[0-9]+)([eE][+-]?[0-9]+)?
fn lex_number(input: &str, start: usize) -> Result<(f64, usize), ParseError> {
    let bytes = input.as_bytes();
    let mut i = start;
    if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }
    if digits == 0 {
        return Err(ParseError::InvalidNumber { offset: start });
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if exp_start == j {
            return Err(ParseError::InvalidNumber { offset: start });
        }
        i = j;
    }

    let v: f64 = input[start..i]
        .parse()
        .map_err(|_| ParseError::InvalidNumber { offset: start })?;
    Ok((v, i))
}

/// Stop as written in an SVG `<stop>` element.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SvgStop {
    /// CSS color string.
    pub color: String,
    /// Position as a fraction in `[0, 1]` (values outside are kept).
    pub offset: f64,
    /// Optional `stop-opacity`, multiplied into the color's alpha.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl SvgStop {
    pub(crate) fn to_color_stop(&self) -> Result<ColorStop, ParseError> {
        if !self.offset.is_finite() {
            return Err(ParseError::NonFinite("stop offset"));
        }
        let mut color = parse_color(&self.color)?;
        if let Some(opacity) = self.opacity {
            if !opacity.is_finite() {
                return Err(ParseError::NonFinite("stop opacity"));
            }
            color = color.scale_alpha(opacity);
        }
        Ok(ColorStop::new(color, self.offset * 100.0))
    }
}

/// Gradient whose geometry is given as a transform list over the family's unit primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformListGradient {
    /// Gradient family.
    pub family: GradientFamily,
    /// Transform list mapping the unit primitive into viewport space.
    pub transform: String,
    /// Stops in document order.
    #[serde(default)]
    pub stops: Vec<SvgStop>,
    /// Overrides the frame's bounds offset for this gradient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds_offset: Option<Vec2>,
}

/// Adapter for [`TransformListGradient`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TransformListAdapter;

impl GradientAdapter for TransformListAdapter {
    type Input = TransformListGradient;

    fn parse(
        &self,
        raw: &TransformListGradient,
        frame: &SourceFrame,
    ) -> Result<GradientDescriptor, ParseError> {
        let transform = parse_transform_list(&raw.transform)?;
        let stops = raw
            .stops
            .iter()
            .map(SvgStop::to_color_stop)
            .collect::<Result<Vec<_>, _>>()?;
        let offset = raw.bounds_offset.unwrap_or(frame.bounds_offset);

        Ok(GradientDescriptor::from_viewport(
            raw.family,
            stops,
            transform,
            offset,
            sweep_rotation_for(raw.family, transform, frame),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/adapters/transform_list.rs"]
mod tests;
