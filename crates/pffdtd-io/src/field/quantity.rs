//! Field identifiers and the physical quantities they name.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Identifier of one field component in a `.fd` header.
///
/// The simulator encodes quantities as small integers: the tens digit picks
/// the quantity and the units digit the Cartesian component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(pub u16);

impl FieldId {
    pub const EX: FieldId = FieldId(11);
    pub const EY: FieldId = FieldId(12);
    pub const EZ: FieldId = FieldId(13);
    pub const BX: FieldId = FieldId(21);
    pub const BY: FieldId = FieldId(22);
    pub const BZ: FieldId = FieldId(23);

    /// The named quantity, if this id is one the simulator emits.
    pub fn quantity(self) -> Option<Quantity> {
        let component = |digit: u16| match digit {
            1 => Some(Component::X),
            2 => Some(Component::Y),
            3 => Some(Component::Z),
            _ => None,
        };
        let (tens, units) = (self.0 / 10, self.0 % 10);
        match (tens, units) {
            (1, c) => component(c).map(Quantity::ElectricField),
            (2, c) => component(c).map(Quantity::MagneticFlux),
            (3, c) => component(c).map(|component| Quantity::Velocity {
                species: 0,
                component,
            }),
            (4, 0) => Some(Quantity::DensityPerturbation { species: 0 }),
            (5, c) => component(c).map(|component| Quantity::Velocity {
                species: 1,
                component,
            }),
            (6, 0) => Some(Quantity::DensityPerturbation { species: 1 }),
            _ => None,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FieldId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .map(FieldId)
            .map_err(|_| Error::Config(format!("invalid field id '{s}'")))
    }
}

/// Cartesian vector component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    X,
    Y,
    Z,
}

/// Physical quantity carried by a field column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Electric field E.
    ElectricField(Component),
    /// Magnetic flux density B.
    MagneticFlux(Component),
    /// Fluid velocity of a plasma species.
    Velocity { species: u8, component: Component },
    /// Density minus the background density of a plasma species.
    DensityPerturbation { species: u8 },
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::ElectricField(c) => write!(f, "E{}", axis_suffix(*c)),
            Quantity::MagneticFlux(c) => write!(f, "B{}", axis_suffix(*c)),
            Quantity::Velocity { species, component } => {
                write!(f, "U{}[{species}]", axis_suffix(*component))
            }
            Quantity::DensityPerturbation { species } => write!(f, "dN[{species}]"),
        }
    }
}

fn axis_suffix(c: Component) -> &'static str {
    match c {
        Component::X => "x",
        Component::Y => "y",
        Component::Z => "z",
    }
}

/// A block of field columns the simulator emits together for every grid
/// point, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldGroup {
    /// Ex, Ey, Ez.
    Electric,
    /// Bx, By, Bz.
    Magnetic,
    /// Velocity of species 0.
    Velocity0,
    /// Density perturbation of species 0.
    Density0,
    /// Velocity of species 1.
    Velocity1,
    /// Density perturbation of species 1.
    Density1,
}

impl FieldGroup {
    /// All groups in the order they appear for one grid point.
    pub const ALL: [FieldGroup; 6] = [
        FieldGroup::Electric,
        FieldGroup::Magnetic,
        FieldGroup::Velocity0,
        FieldGroup::Density0,
        FieldGroup::Velocity1,
        FieldGroup::Density1,
    ];

    /// Field ids written for one grid point.
    pub fn ids(self) -> &'static [FieldId] {
        match self {
            FieldGroup::Electric => &[FieldId(11), FieldId(12), FieldId(13)],
            FieldGroup::Magnetic => &[FieldId(21), FieldId(22), FieldId(23)],
            FieldGroup::Velocity0 => &[FieldId(31), FieldId(32), FieldId(33)],
            FieldGroup::Density0 => &[FieldId(40)],
            FieldGroup::Velocity1 => &[FieldId(51), FieldId(52), FieldId(53)],
            FieldGroup::Density1 => &[FieldId(60)],
        }
    }

    /// Whether the simulator only emits this group with plasma enabled.
    pub fn requires_plasma(self) -> bool {
        !matches!(self, FieldGroup::Electric | FieldGroup::Magnetic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_quantities() {
        assert_eq!(
            FieldId::EX.quantity(),
            Some(Quantity::ElectricField(Component::X))
        );
        assert_eq!(
            FieldId(23).quantity(),
            Some(Quantity::MagneticFlux(Component::Z))
        );
        assert_eq!(
            FieldId(52).quantity(),
            Some(Quantity::Velocity {
                species: 1,
                component: Component::Y
            })
        );
        assert_eq!(
            FieldId(40).quantity(),
            Some(Quantity::DensityPerturbation { species: 0 })
        );
        assert_eq!(FieldId(60).quantity().unwrap().to_string(), "dN[1]");
    }

    #[test]
    fn test_unknown_ids() {
        assert_eq!(FieldId(14).quantity(), None);
        assert_eq!(FieldId(41).quantity(), None);
        assert_eq!(FieldId(7).quantity(), None);
    }

    #[test]
    fn test_group_ids_name_quantities() {
        for group in FieldGroup::ALL {
            for id in group.ids() {
                assert!(id.quantity().is_some(), "{id} should be known");
            }
        }
        assert!(!FieldGroup::Magnetic.requires_plasma());
        assert!(FieldGroup::Density1.requires_plasma());
    }

    #[test]
    fn test_parse_field_id() {
        assert_eq!("12".parse::<FieldId>().unwrap(), FieldId::EY);
        assert!("-3".parse::<FieldId>().is_err());
        assert!("Ex".parse::<FieldId>().is_err());
    }
}
