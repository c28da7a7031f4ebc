//! The type tag carried by every variant.
//!
//! Numeric codes are stable and match the codes used by the wire encoders that
//! produce these trees, so a tag can be stored or transmitted as a single byte.

use std::fmt;

use crate::error::AnyError;

/// Discriminator identifying which kind a variant holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum AnyType {
    Int = 0,
    Double = 1,
    String = 2,
    Vector = 3,
    Map = 4,
    Null = 5,
    Ecma = 6,
}

impl AnyType {
    /// Every kind, in code order.
    pub const ALL: [AnyType; 7] = [
        AnyType::Int,
        AnyType::Double,
        AnyType::String,
        AnyType::Vector,
        AnyType::Map,
        AnyType::Null,
        AnyType::Ecma,
    ];

    /// The stable numeric code of this kind.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Tag name, e.g. `kInt` or `kEcma`.
    pub fn as_str(self) -> &'static str {
        match self {
            AnyType::Int => "kInt",
            AnyType::Double => "kDouble",
            AnyType::String => "kString",
            AnyType::Vector => "kVector",
            AnyType::Map => "kMap",
            AnyType::Null => "kNull",
            AnyType::Ecma => "kEcma",
        }
    }

    /// True for the kinds that hold child variants.
    pub fn is_container(self) -> bool {
        matches!(self, AnyType::Vector | AnyType::Map | AnyType::Ecma)
    }
}

impl fmt::Display for AnyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for AnyType {
    type Error = AnyError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        AnyType::ALL
            .get(code as usize)
            .copied()
            .ok_or(AnyError::UnknownTypeCode(code))
    }
}

impl From<AnyType> for u8 {
    fn from(ty: AnyType) -> u8 {
        ty.code()
    }
}

/// Tag name for a raw code, `kUnknown` when the code is outside the table.
///
/// ```
/// use any_core::types::type_code_str;
///
/// assert_eq!(type_code_str(6), "kEcma");
/// assert_eq!(type_code_str(42), "kUnknown");
/// ```
pub fn type_code_str(code: u8) -> &'static str {
    AnyType::try_from(code)
        .map(AnyType::as_str)
        .unwrap_or("kUnknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_declaration_order() {
        for (i, ty) in AnyType::ALL.iter().enumerate() {
            assert_eq!(ty.code() as usize, i);
            assert_eq!(AnyType::try_from(ty.code()).unwrap(), *ty);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!(matches!(
            AnyType::try_from(7u8),
            Err(AnyError::UnknownTypeCode(7))
        ));
        assert_eq!(type_code_str(255), "kUnknown");
    }

    #[test]
    fn only_collections_are_containers() {
        let containers: Vec<AnyType> = AnyType::ALL
            .into_iter()
            .filter(|ty| ty.is_container())
            .collect();
        assert_eq!(
            containers,
            vec![AnyType::Vector, AnyType::Map, AnyType::Ecma]
        );
    }
}
