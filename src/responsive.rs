use std::{
    fmt,
    ops::{Bound, RangeBounds},
    str::FromStr,
};

use bitflags::bitflags;
use tracing::warn;

use crate::error::SeuilError;

bitflags! {
  /// A set of [`Tier`]s, one bit per tier in ascending order.
  #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
  #[must_use]
  pub struct TierFlags: u8 {
    const XS = 1;
    const SM = 2;
    const MD = 4;
    const LG = 8;
    const XL = 16;
  }
}

impl TierFlags {
    /// Whether these flags are at `tier` or below it and nothing above it.
    pub fn and_down(self, tier: Tier) -> bool {
        self.intersects(range(..=tier))
            && !self.intersects(range((Bound::Excluded(tier), Bound::Unbounded)))
    }

    /// Whether these flags are at `tier` or above it and nothing below it.
    pub fn and_up(self, tier: Tier) -> bool {
        !self.intersects(range(..tier)) && self.intersects(range(tier..))
    }
}

/// One of the five named width ranges.
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Tier {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Tier {
    /// Every tier, smallest first.
    pub const ALL: [Tier; 5] = [Tier::Xs, Tier::Sm, Tier::Md, Tier::Lg, Tier::Xl];

    pub const fn name(self) -> &'static str {
        match self {
            Tier::Xs => "xs",
            Tier::Sm => "sm",
            Tier::Md => "md",
            Tier::Lg => "lg",
            Tier::Xl => "xl",
        }
    }

    pub const fn flag(self) -> TierFlags {
        match self {
            Tier::Xs => TierFlags::XS,
            Tier::Sm => TierFlags::SM,
            Tier::Md => TierFlags::MD,
            Tier::Lg => TierFlags::LG,
            Tier::Xl => TierFlags::XL,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = SeuilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.name() == s)
            .ok_or_else(|| SeuilError::UnknownTier(s.to_string()))
    }
}

/// The flags of every tier inside `range`.
///
/// ```rust
/// use seuil::responsive::{Tier, TierFlags, range};
///
/// assert_eq!(range(..=Tier::Sm), TierFlags::XS | TierFlags::SM);
/// assert_eq!(range(Tier::Lg..), TierFlags::LG | TierFlags::XL);
/// ```
pub fn range<R: RangeBounds<Tier>>(range: R) -> TierFlags {
    let start = match range.start_bound() {
        Bound::Included(tier) => tier.flag().bits(),
        Bound::Excluded(tier) => tier.flag().bits() << 1,
        Bound::Unbounded => TierFlags::XS.bits(),
    };
    let end = match range.end_bound() {
        Bound::Included(tier) => tier.flag().bits(),
        Bound::Excluded(tier) => tier.flag().bits() >> 1,
        Bound::Unbounded => TierFlags::XL.bits(),
    };
    if start == 0 || end == 0 || start > end {
        return TierFlags::empty();
    }
    // Every bit from `start` up to and including `end`.
    TierFlags::from_bits_truncate((end << 1) - start)
}

/// Width thresholds in pixels, strictly ascending from `xs` to `xl`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawThresholds")
)]
pub struct Thresholds {
    xs: f64,
    sm: f64,
    md: f64,
    lg: f64,
    xl: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawThresholds {
    xs: f64,
    sm: f64,
    md: f64,
    lg: f64,
    xl: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawThresholds> for Thresholds {
    type Error = SeuilError;

    fn try_from(raw: RawThresholds) -> Result<Self, Self::Error> {
        Thresholds::new(raw.xs, raw.sm, raw.md, raw.lg, raw.xl)
    }
}

pub const DEFAULT_THRESHOLDS: Thresholds = Thresholds {
    xs: 320.0,
    sm: 768.0,
    md: 1200.0,
    lg: 1500.0,
    xl: 1920.0,
};

impl Default for Thresholds {
    fn default() -> Self {
        DEFAULT_THRESHOLDS
    }
}

impl Thresholds {
    pub fn new(xs: f64, sm: f64, md: f64, lg: f64, xl: f64) -> Result<Self, SeuilError> {
        let thresholds = Self { xs, sm, md, lg, xl };

        for tier in Tier::ALL {
            let value = thresholds.get(tier);
            if !value.is_finite() || value < 0.0 {
                return Err(SeuilError::InvalidThreshold { tier, value });
            }
        }

        for pair in Tier::ALL.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            let (lower_value, upper_value) = (thresholds.get(lower), thresholds.get(upper));
            if upper_value <= lower_value {
                return Err(SeuilError::NonAscending {
                    lower,
                    lower_value,
                    upper,
                    upper_value,
                });
            }
        }

        Ok(thresholds)
    }

    pub fn get(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Xs => self.xs,
            Tier::Sm => self.sm,
            Tier::Md => self.md,
            Tier::Lg => self.lg,
            Tier::Xl => self.xl,
        }
    }

    /// The tier `width` falls into.
    ///
    /// A width equal to a boundary belongs to the next tier up. Anything at
    /// or above the `lg` boundary is `xl`, so the `xl` boundary itself never
    /// takes part in the classification.
    pub fn tier_for(&self, width: f64) -> Tier {
        if width < self.xs {
            return Tier::Xs;
        }
        if width < self.sm {
            return Tier::Sm;
        }
        if width < self.md {
            return Tier::Md;
        }
        if width < self.lg {
            return Tier::Lg;
        }
        Tier::Xl
    }
}

/// Classifies a viewport width against a set of [`Thresholds`].
///
/// Exactly one membership flag is set at any time.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakpoint {
    thresholds: Thresholds,
    width: f64,
    tier: Tier,
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLDS)
    }
}

impl Breakpoint {
    /// A classifier starting at width `0`.
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            width: 0.0,
            tier: thresholds.tier_for(0.0),
        }
    }

    /// Record a new viewport width and reclassify it.
    ///
    /// Negative and non-finite widths are treated as `0`.
    pub fn set_width(&mut self, width: f64) {
        let width = if width.is_finite() && width >= 0.0 {
            width
        } else {
            warn!(width, "invalid viewport width, using 0");
            0.0
        };
        self.width = width;
        self.tier = self.thresholds.tier_for(width);
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Current tier name
    pub fn name(&self) -> &'static str {
        self.tier.name()
    }

    pub fn flags(&self) -> TierFlags {
        self.tier.flag()
    }

    /// Whether the width is below the `xs` boundary (very small devices)
    pub fn xs(&self) -> bool {
        self.tier == Tier::Xs
    }

    /// Whether the width is in the `sm` range (small devices)
    pub fn sm(&self) -> bool {
        self.tier == Tier::Sm
    }

    /// Whether the width is in the `md` range (e.g. tablets)
    pub fn md(&self) -> bool {
        self.tier == Tier::Md
    }

    /// Whether the width is in the `lg` range (e.g. laptops)
    pub fn lg(&self) -> bool {
        self.tier == Tier::Lg
    }

    /// Whether the width is at or above the `lg` boundary (e.g. desktops)
    pub fn xl(&self) -> bool {
        self.tier == Tier::Xl
    }
}
