// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Order in which the three elementary rotations of an Euler triple are
/// applied by [`crate::Quat::from_euler_with_order`].
///
/// The name lists intrinsic (body-fixed) axes in application order:
/// [`EulerOrder::Zyx`] rotates about Z, then about the rotated Y, then
/// about the twice-rotated X, which is the product `qz ⊗ qy ⊗ qx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EulerOrder {
    /// X, then Y, then Z.
    #[default]
    Xyz,
    /// X, then Z, then Y.
    Xzy,
    /// Y, then X, then Z.
    Yxz,
    /// Y, then Z, then X.
    Yzx,
    /// Z, then X, then Y.
    Zxy,
    /// Z, then Y, then X.
    Zyx,
}

impl EulerOrder {
    /// All six orders.
    pub const ALL: [Self; 6] = [Self::Xyz, Self::Xzy, Self::Yxz, Self::Yzx, Self::Zxy, Self::Zyx];

    /// Lowercase three-letter name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xyz => "xyz",
            Self::Xzy => "xzy",
            Self::Yxz => "yxz",
            Self::Yzx => "yzx",
            Self::Zxy => "zxy",
            Self::Zyx => "zyx",
        }
    }
}

impl fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name one of the six Euler orders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown euler angle order {0:?} (expected one of xyz, xzy, yxz, yzx, zxy, zyx)")]
pub struct ParseEulerOrderError(pub String);

impl FromStr for EulerOrder {
    type Err = ParseEulerOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEulerOrderError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("ZYX".parse::<EulerOrder>(), Ok(EulerOrder::Zyx));
        assert_eq!("yXz".parse::<EulerOrder>(), Ok(EulerOrder::Yxz));
        for order in EulerOrder::ALL {
            assert_eq!(order.to_string().parse::<EulerOrder>(), Ok(order));
        }
    }

    #[test]
    fn rejects_unknown_orders() {
        let err = "xxy".parse::<EulerOrder>().unwrap_err();
        assert_eq!(err, ParseEulerOrderError("xxy".into()));
        assert!(err.to_string().contains("xxy"));
        assert!("".parse::<EulerOrder>().is_err());
    }
}
