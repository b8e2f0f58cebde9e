//! Editable hanging plan and its derived arrangement.
//!
//! [`HangPlan`] holds the state a caller edits (wall, ordered paintings,
//! spacing mode, layout config). [`HangPlan::arrange`] validates it and
//! recomputes everything derived from it: the resolved spacing, every
//! painting's layout, the measurements to transfer to the wall, and
//! warnings worth surfacing to the user. Call it again after any edit.
//!
//! # Example
//!
//! ```
//! use hangcalc::{HangPlan, MountType, Painting, SpacingMode, Wall};
//!
//! let plan = HangPlan::new(Wall::new(300.0, 100.0))
//!     .painting(Painting::new("A", 50.0, 40.0, MountType::wire(5.0)))
//!     .painting(Painting::new("B", 50.0, 40.0, MountType::wire(5.0)))
//!     .spacing(SpacingMode::Manual(20.0));
//!
//! let arrangement = plan.arrange().unwrap();
//! assert_eq!(arrangement.spacing(), 20.0);
//! assert_eq!(arrangement.left_margin(), Some(20.0));
//! assert_eq!(arrangement.gaps(), [20.0]);
//! assert_eq!(arrangement.right_margin(), Some(160.0));
//! assert!(arrangement.warnings().is_empty());
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::layout::{LayoutConfig, LayoutError, Painting, PaintingLayout, SpacingPolicy, Wall};

/// Name given to paintings added without one.
pub const UNTITLED: &str = "Untitled";

/// Where the spacing value comes from.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpacingMode {
    /// Spread the paintings evenly, floored at the configured minimum.
    #[default]
    Auto,
    /// Use this spacing as given.
    Manual(f64),
}

/// Something in an arrangement the user should know about.
///
/// None of these stop the layout from being computed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Warning {
    /// Manual spacing is wider than the spacing at which the row fits.
    SpacingTooLarge { spacing: f64, fits: f64 },
    /// Auto spacing came out below the floor and was raised to it.
    SpacingFloored { computed: f64, minimum: f64 },
    /// The painting at `index` extends past an edge of the wall.
    Overflow { index: usize },
    /// The hanger drop of the painting at `index` exceeds its height.
    HangerBelowPainting { index: usize },
    /// The D-ring inset of the painting at `index` exceeds half its width.
    CrossedDRings { index: usize },
}

impl core::fmt::Display for Warning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SpacingTooLarge { spacing, fits } => write!(
                f,
                "spacing {spacing} too large for wall width (row fits at {fits})"
            ),
            Self::SpacingFloored { computed, minimum } => write!(
                f,
                "paintings leave only {computed} per gap; using minimum spacing {minimum}"
            ),
            Self::Overflow { index } => write!(f, "painting {index} extends past the wall"),
            Self::HangerBelowPainting { index } => {
                write!(f, "hanger of painting {index} is below its bottom edge")
            }
            Self::CrossedDRings { index } => {
                write!(f, "D-rings of painting {index} cross each other")
            }
        }
    }
}

/// The editable inputs of a layout.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "PlanFields"))]
pub struct HangPlan {
    wall: Wall,
    paintings: Vec<Painting>,
    spacing: SpacingMode,
    config: LayoutConfig,
}

/// Wire form of [`HangPlan`]; loading goes through the same name
/// normalization as [`HangPlan::push`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PlanFields {
    wall: Wall,
    paintings: Vec<Painting>,
    #[serde(default)]
    spacing: SpacingMode,
    #[serde(default)]
    config: LayoutConfig,
}

#[cfg(feature = "serde")]
impl From<PlanFields> for HangPlan {
    fn from(fields: PlanFields) -> Self {
        Self {
            wall: fields.wall,
            paintings: fields.paintings.into_iter().map(named).collect(),
            spacing: fields.spacing,
            config: fields.config,
        }
    }
}

impl HangPlan {
    /// Empty plan for `wall`, auto spacing, default config.
    pub fn new(wall: Wall) -> Self {
        Self {
            wall,
            paintings: Vec::new(),
            spacing: SpacingMode::Auto,
            config: LayoutConfig::new(),
        }
    }

    /// Append a painting.
    pub fn painting(mut self, painting: Painting) -> Self {
        self.push(painting);
        self
    }

    /// Set the spacing mode.
    pub fn spacing(mut self, mode: SpacingMode) -> Self {
        self.spacing = mode;
        self
    }

    /// Replace the layout config.
    pub fn config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the spacing policy, keeping the rest of the config.
    pub fn policy(mut self, policy: SpacingPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    pub fn paintings(&self) -> &[Painting] {
        &self.paintings
    }

    pub fn spacing_mode(&self) -> SpacingMode {
        self.spacing
    }

    pub fn layout_config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn set_wall(&mut self, wall: Wall) {
        self.wall = wall;
    }

    pub fn set_spacing(&mut self, mode: SpacingMode) {
        self.spacing = mode;
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    /// Append a painting to the right end of the row.
    pub fn push(&mut self, painting: Painting) {
        self.paintings.push(named(painting));
    }

    /// Insert a painting at `index`, shifting later ones right.
    pub fn insert(&mut self, index: usize, painting: Painting) -> Result<(), LayoutError> {
        if index > self.paintings.len() {
            return Err(self.out_of_range(index));
        }
        self.paintings.insert(index, named(painting));
        Ok(())
    }

    /// Replace the painting at `index`, returning the old one.
    pub fn replace(&mut self, index: usize, painting: Painting) -> Result<Painting, LayoutError> {
        let len = self.paintings.len();
        let slot = self
            .paintings
            .get_mut(index)
            .ok_or(LayoutError::IndexOutOfRange { index, len })?;
        Ok(core::mem::replace(slot, named(painting)))
    }

    /// Remove the painting at `index`.
    ///
    /// Dropping back to a single painting resets the spacing mode to
    /// [`SpacingMode::Auto`], since spacing has no meaning for one painting.
    pub fn remove(&mut self, index: usize) -> Result<Painting, LayoutError> {
        if index >= self.paintings.len() {
            return Err(self.out_of_range(index));
        }
        let removed = self.paintings.remove(index);
        if self.paintings.len() == 1 {
            self.spacing = SpacingMode::Auto;
        }
        Ok(removed)
    }

    /// Insert a copy of the painting at `index` right after it, named
    /// `"<name> (Copy)"`.
    pub fn duplicate(&mut self, index: usize) -> Result<(), LayoutError> {
        let original = self
            .paintings
            .get(index)
            .ok_or_else(|| self.out_of_range(index))?;
        let copy = Painting {
            name: format!("{} (Copy)", original.name),
            ..original.clone()
        };
        self.paintings.insert(index + 1, copy);
        Ok(())
    }

    /// Remove all paintings and reset the spacing mode to auto.
    pub fn clear(&mut self) {
        self.paintings.clear();
        self.spacing = SpacingMode::Auto;
    }

    /// Spacing the layout will use.
    ///
    /// With fewer than two paintings this is the config's default spacing
    /// regardless of mode.
    pub fn resolved_spacing(&self) -> f64 {
        if self.paintings.len() <= 1 {
            return self.config.default_spacing;
        }
        match self.spacing {
            SpacingMode::Auto => self.config.auto_spacing(&self.wall, &self.paintings),
            SpacingMode::Manual(spacing) => spacing,
        }
    }

    /// Validate the plan and compute its arrangement.
    ///
    /// Fails on a non-positive wall or painting dimension, a negative mount
    /// offset, or (with two or more paintings) a negative or non-finite
    /// manual spacing. Geometric problems become [`Warning`]s instead.
    pub fn arrange(&self) -> Result<Arrangement<'_>, LayoutError> {
        self.wall.validate()?;
        for painting in &self.paintings {
            painting.validate()?;
        }
        if self.paintings.len() > 1
            && let SpacingMode::Manual(spacing) = self.spacing
        {
            if !spacing.is_finite() {
                return Err(LayoutError::NotFinite { what: "spacing" });
            }
            if spacing < 0.0 {
                return Err(LayoutError::NegativeSpacing(spacing));
            }
        }

        let spacing = self.resolved_spacing();
        let layouts = self.config.compute(&self.wall, &self.paintings, spacing);
        tracing::debug!(
            paintings = self.paintings.len(),
            spacing,
            mode = ?self.spacing,
            policy = ?self.config.policy,
            "arranged wall"
        );
        for (index, layout) in layouts.iter().enumerate() {
            tracing::trace!(
                index,
                name = %layout.painting.name,
                x = layout.origin.x,
                y = layout.origin.y,
                hangers = layout.mounting_points.len(),
                "placed painting"
            );
        }

        let warnings = self.collect_warnings(&layouts);
        for warning in &warnings {
            tracing::warn!(%warning, "layout warning");
        }

        Ok(Arrangement {
            wall: self.wall,
            spacing,
            mode: self.spacing,
            layouts,
            warnings,
        })
    }

    fn collect_warnings(&self, layouts: &[PaintingLayout<'_>]) -> Vec<Warning> {
        let mut warnings = Vec::new();

        if self.paintings.len() > 1 {
            let fits = self.config.even_spacing(&self.wall, &self.paintings);
            match self.spacing {
                SpacingMode::Manual(spacing) if spacing > fits => {
                    warnings.push(Warning::SpacingTooLarge { spacing, fits });
                }
                SpacingMode::Auto if fits < self.config.minimum_spacing => {
                    warnings.push(Warning::SpacingFloored {
                        computed: fits,
                        minimum: self.config.minimum_spacing,
                    });
                }
                _ => {}
            }
        }

        for (index, layout) in layouts.iter().enumerate() {
            let painting = layout.painting;
            if !layout.fits_within(&self.wall) {
                warnings.push(Warning::Overflow { index });
            }
            if painting.mount.hangs_below(painting.height) {
                warnings.push(Warning::HangerBelowPainting { index });
            }
            if painting.mount.crosses(painting.width) {
                warnings.push(Warning::CrossedDRings { index });
            }
        }

        warnings
    }

    fn out_of_range(&self, index: usize) -> LayoutError {
        LayoutError::IndexOutOfRange {
            index,
            len: self.paintings.len(),
        }
    }
}

fn named(mut painting: Painting) -> Painting {
    if painting.name.trim().is_empty() {
        painting.name = String::from(UNTITLED);
    }
    painting
}

/// A computed layout with its measurements and warnings.
///
/// Borrows the paintings of the [`HangPlan`] it came from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Arrangement<'a> {
    wall: Wall,
    spacing: f64,
    mode: SpacingMode,
    layouts: Vec<PaintingLayout<'a>>,
    warnings: Vec<Warning>,
}

impl<'a> Arrangement<'a> {
    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    /// The spacing the layout was computed with.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn spacing_mode(&self) -> SpacingMode {
        self.mode
    }

    /// Placed paintings in input order.
    pub fn layouts(&self) -> &[PaintingLayout<'a>] {
        &self.layouts
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Distance from the wall's left edge to the first painting.
    pub fn left_margin(&self) -> Option<f64> {
        self.layouts.first().map(|l| l.origin.x)
    }

    /// Distance from the last painting to the wall's right edge.
    pub fn right_margin(&self) -> Option<f64> {
        self.layouts.last().map(|l| self.wall.width - l.right())
    }

    /// Horizontal gap between each pair of neighboring paintings.
    pub fn gaps(&self) -> Vec<f64> {
        self.layouts
            .windows(2)
            .map(|pair| pair[1].origin.x - pair[0].right())
            .collect()
    }
}
