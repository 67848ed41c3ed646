#![forbid(unsafe_code)]

//! Mapping between the real (bounded) and virtual (unbounded) scroll spaces.
//!
//! Browser engines cap the height of a scrollable element at tens of millions
//! of pixels. A grid with enough rows wants a canvas far taller than that, so
//! the real canvas is capped and a [`Scale`] maps real pixel positions onto
//! the full virtual range linearly: one real pixel of scrollbar travel covers
//! [`factor`](Scale::factor) virtual pixels. Proportional position is
//! preserved without ever asking the host for an element taller than its
//! ceiling.
//!
//! A `Scale` is an immutable value. Whenever the geometry changes (row count,
//! row or header height, viewport height, canvas cap), build a new one and
//! install it via [`ScrollAction::SetScale`](crate::state::ScrollAction).

use crate::config::ScrollConfig;
use crate::error::GeometryError;

/// Geometry inputs for a [`Scale`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleParams {
    /// Real scrollable canvas height in px (already capped by the host).
    pub canvas_height: f64,
    /// Viewport height in px.
    pub client_height: f64,
    /// Header band height in px.
    pub header_height: f64,
    /// Height of one data row in px.
    pub row_height: f64,
    /// Total data row count.
    pub num_rows: usize,
}

/// Conversion between real and virtual scroll coordinates for one geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scale {
    params: ScaleParams,
    factor: f64,
    virtual_canvas_height: f64,
}

fn positive_finite(name: &'static str, value: f64) -> Result<f64, GeometryError> {
    if !value.is_finite() {
        return Err(GeometryError::NonFiniteDimension { name, value });
    }
    if value <= 0.0 {
        return Err(GeometryError::NonPositiveDimension { name, value });
    }
    Ok(value)
}

impl Scale {
    /// Build a scale, validating every geometric invariant.
    ///
    /// All heights must be finite and strictly positive, the real canvas must
    /// be taller than the viewport, and so must the virtual canvas
    /// (`header_height + num_rows * row_height`).
    pub fn new(params: ScaleParams) -> Result<Self, GeometryError> {
        let canvas_height = positive_finite("canvas_height", params.canvas_height)?;
        let client_height = positive_finite("client_height", params.client_height)?;
        let header_height = positive_finite("header_height", params.header_height)?;
        let row_height = positive_finite("row_height", params.row_height)?;

        let virtual_canvas_height = header_height + params.num_rows as f64 * row_height;
        if !virtual_canvas_height.is_finite() {
            return Err(GeometryError::NonFiniteDimension {
                name: "virtual_canvas_height",
                value: virtual_canvas_height,
            });
        }
        if canvas_height <= client_height {
            return Err(GeometryError::CanvasNotScrollable {
                canvas_height,
                client_height,
            });
        }
        if virtual_canvas_height <= client_height {
            return Err(GeometryError::VirtualCanvasNotScrollable {
                virtual_canvas_height,
                client_height,
            });
        }

        let factor = (virtual_canvas_height - client_height) / (canvas_height - client_height);
        if !factor.is_finite() {
            return Err(GeometryError::NonFiniteDimension {
                name: "factor",
                value: factor,
            });
        }

        Ok(Self {
            params,
            factor,
            virtual_canvas_height,
        })
    }

    /// Build a scale for a grid, deriving the canvas height from the virtual
    /// height capped at [`ScrollConfig::max_canvas_px`].
    ///
    /// When no capping is needed the two spaces coincide and the factor is 1.
    pub fn for_grid(
        client_height: f64,
        header_height: f64,
        row_height: f64,
        num_rows: usize,
        config: &ScrollConfig,
    ) -> Result<Self, GeometryError> {
        let header_height = positive_finite("header_height", header_height)?;
        let row_height = positive_finite("row_height", row_height)?;
        let virtual_height = header_height + num_rows as f64 * row_height;
        Self::new(ScaleParams {
            canvas_height: config.capped_canvas_height(virtual_height),
            client_height,
            header_height,
            row_height,
            num_rows,
        })
    }

    /// Geometry this scale was built from.
    #[must_use]
    pub const fn params(&self) -> ScaleParams {
        self.params
    }

    /// Ratio of virtual to real usable scroll range.
    #[must_use]
    pub const fn factor(&self) -> f64 {
        self.factor
    }

    /// Full logical canvas height: `header_height + num_rows * row_height`.
    #[must_use]
    pub const fn virtual_canvas_height(&self) -> f64 {
        self.virtual_canvas_height
    }

    /// Largest reachable real scroll position.
    #[must_use]
    pub fn max_scroll_top(&self) -> f64 {
        self.params.canvas_height - self.params.client_height
    }

    /// Largest reachable virtual scroll position.
    #[must_use]
    pub fn max_virtual_scroll_top(&self) -> f64 {
        self.virtual_canvas_height - self.params.client_height
    }

    /// Map a real scroll position into virtual coordinates.
    #[inline]
    #[must_use]
    pub fn to_virtual(&self, scroll_top: f64) -> f64 {
        scroll_top * self.factor
    }

    /// Map a virtual scroll position back into real coordinates.
    #[inline]
    #[must_use]
    pub fn from_virtual(&self, virtual_scroll_top: f64) -> f64 {
        virtual_scroll_top / self.factor
    }
}
