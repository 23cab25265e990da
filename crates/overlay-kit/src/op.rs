//! Overlay operation codes.

use std::fmt;
use std::str::FromStr;

use crate::error::OverlayError;

/// Boolean set operation on two planar geometries.
///
/// Operand roles matter only for `Difference` (A − B).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpCode {
    Intersection,
    Union,
    Difference,
    SymDifference,
}

impl OpCode {
    pub const ALL: [OpCode; 4] = [
        OpCode::Intersection,
        OpCode::Union,
        OpCode::Difference,
        OpCode::SymDifference,
    ];

    /// Numeric code used by overlay engines: 1..=4.
    #[inline]
    pub fn code(self) -> i32 {
        match self {
            OpCode::Intersection => 1,
            OpCode::Union => 2,
            OpCode::Difference => 3,
            OpCode::SymDifference => 4,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            OpCode::Intersection => "intersection",
            OpCode::Union => "union",
            OpCode::Difference => "difference",
            OpCode::SymDifference => "symdifference",
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OpCode {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intersection" => Ok(OpCode::Intersection),
            "union" => Ok(OpCode::Union),
            "difference" => Ok(OpCode::Difference),
            "symdifference" | "symdiff" | "xor" => Ok(OpCode::SymDifference),
            _ => Err(OverlayError::UnknownOpCode(s.to_string())),
        }
    }
}

impl TryFrom<i32> for OpCode {
    type Error = OverlayError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        OpCode::ALL
            .into_iter()
            .find(|op| op.code() == code)
            .ok_or_else(|| OverlayError::UnknownOpCode(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_roundtrip_names() {
        for op in OpCode::ALL {
            assert_eq!(op.to_string().parse::<OpCode>().unwrap(), op);
            assert_eq!(OpCode::try_from(op.code()).unwrap(), op);
        }
        assert_eq!("XOR".parse::<OpCode>().unwrap(), OpCode::SymDifference);
        assert_eq!(" Union ".parse::<OpCode>().unwrap(), OpCode::Union);
        assert_eq!(
            "clip".parse::<OpCode>(),
            Err(OverlayError::UnknownOpCode("clip".into()))
        );
        assert!(OpCode::try_from(0).is_err());
    }
}
