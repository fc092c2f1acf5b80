//! Normalization of declared panel sizes into grid units.

use crate::config::{GRID_WIDTH, SizeDefaults};
use crate::ir::DeclaredWidth;
use crate::layout::{LayoutError, Result};

pub const DEFAULT_WIDTH: u32 = 12;
pub const DEFAULT_HEIGHT: u32 = 8;

/// Semantic width tokens and the number of columns each one spans.
pub const SEMANTIC_WIDTHS: [(&str, u32); 6] = [
    ("whole", 48),
    ("half", 24),
    ("third", 16),
    ("quarter", 12),
    ("sixth", 8),
    ("eighth", 6),
];

pub fn semantic_width(token: &str) -> Option<u32> {
    let token = token.trim();
    SEMANTIC_WIDTHS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map(|(_, units)| *units)
}

/// Resolves a declared width and height using the standard defaults (12 x 8).
pub fn resolve(width: Option<&DeclaredWidth>, height: Option<i64>) -> Result<(u32, u32)> {
    resolve_with(&SizeDefaults::default(), width, height)
}

pub fn resolve_with(
    defaults: &SizeDefaults,
    width: Option<&DeclaredWidth>,
    height: Option<i64>,
) -> Result<(u32, u32)> {
    let width = match width {
        Some(width) => resolve_width(width)?,
        None => defaults.width,
    };
    let height = match height {
        Some(height) => resolve_height(height)?,
        None => defaults.height,
    };
    Ok((width, height))
}

pub fn resolve_width(width: &DeclaredWidth) -> Result<u32> {
    match width {
        DeclaredWidth::Token(token) => semantic_width(token).ok_or_else(|| {
            LayoutError::InvalidSize(format!("unknown width token `{}`", token.trim()))
        }),
        DeclaredWidth::Units(units) => match u32::try_from(*units) {
            Ok(units) if (1..=GRID_WIDTH).contains(&units) => Ok(units),
            _ => Err(LayoutError::InvalidSize(format!(
                "width {units} is outside 1..={GRID_WIDTH}"
            ))),
        },
    }
}

pub fn resolve_height(height: i64) -> Result<u32> {
    match u32::try_from(height) {
        Ok(units) if units >= 1 => Ok(units),
        _ => Err(LayoutError::InvalidSize(format!(
            "height {height} must be at least 1"
        ))),
    }
}
