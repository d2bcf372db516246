//! Three-channel colormaps.

use bytemuck::{Pod, Zeroable};
use chromaline_core::{ChromalineError, DVec2, Result, UnitMap};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::segments::{from_segments, to_segments, SegmentData};

/// One of the three color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in red, green, blue order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Lowercase channel name.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

/// Weights combining the channels into a luminance curve.
///
/// The blue weight is whatever remains after red and green.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuminanceWeights {
    /// Red coefficient (default 0.3).
    pub red: f64,
    /// Green coefficient (default 0.59).
    pub green: f64,
}

impl Default for LuminanceWeights {
    fn default() -> Self {
        Self {
            red: 0.3,
            green: 0.59,
        }
    }
}

impl LuminanceWeights {
    /// Creates weights from the red and green coefficients.
    pub fn new(red: f64, green: f64) -> Result<Self> {
        let weights = Self { red, green };
        weights.validate()?;
        Ok(weights)
    }

    /// Blue coefficient, `1 - red - green`.
    pub fn blue(&self) -> f64 {
        1.0 - self.red - self.green
    }

    /// Largest green coefficient allowed for the current red one.
    pub fn green_max(&self) -> f64 {
        1.0 - self.red
    }

    /// Checks that all three coefficients lie in [0, 1].
    pub fn validate(&self) -> Result<()> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if in_unit(self.red) && in_unit(self.green) && self.green <= self.green_max() {
            Ok(())
        } else {
            Err(ChromalineError::InvalidParameter(format!(
                "luminance weights red = {}, green = {} must be in [0, 1] with red + green <= 1",
                self.red, self.green
            )))
        }
    }
}

/// An 8-bit RGBA color, laid out for direct upload as texture data.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Converts a color with components in [0, 1] to an opaque 8-bit color.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_vec3(color: Vec3) -> Self {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: to_u8(color.x),
            g: to_u8(color.y),
            b: to_u8(color.z),
            a: u8::MAX,
        }
    }
}

/// A named colormap made of red, green and blue unit maps.
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    name: String,
    red: UnitMap,
    green: UnitMap,
    blue: UnitMap,
}

impl Default for Colormap {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

impl Colormap {
    /// Creates a colormap whose channels are all the identity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            red: UnitMap::identity(),
            green: UnitMap::identity(),
            blue: UnitMap::identity(),
        }
    }

    /// Creates a colormap from its three channels.
    pub fn from_channels(name: impl Into<String>, red: UnitMap, green: UnitMap, blue: UnitMap) -> Self {
        Self {
            name: name.into(),
            red,
            green,
            blue,
        }
    }

    /// Returns the colormap name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the colormap name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns one channel.
    pub fn channel(&self, channel: Channel) -> &UnitMap {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Returns one channel for editing.
    pub fn channel_mut(&mut self, channel: Channel) -> &mut UnitMap {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }

    /// Iterates over the channels in red, green, blue order.
    pub fn channels(&self) -> impl Iterator<Item = (Channel, &UnitMap)> {
        Channel::ALL.into_iter().map(move |c| (c, self.channel(c)))
    }

    /// Resets every channel to the identity.
    pub fn reset(&mut self) {
        self.red.reset();
        self.green.reset();
        self.blue.reset();
    }

    /// Sorted, deduplicated x coordinates of every channel's breakpoints.
    pub fn breakpoints(&self) -> Vec<f64> {
        let mut xs: Vec<f64> = self
            .channels()
            .flat_map(|(_, map)| map.points().iter().map(|p| p.x))
            .collect();
        xs.sort_by(f64::total_cmp);
        xs.dedup();
        xs
    }

    /// Samples the colormap at `t`, clamped to [0, 1].
    #[allow(clippy::cast_possible_truncation)]
    pub fn sample(&self, t: f64) -> Result<Vec3> {
        let t = t.clamp(0.0, 1.0);
        Ok(Vec3::new(
            self.red.evaluate(t)? as f32,
            self.green.evaluate(t)? as f32,
            self.blue.evaluate(t)? as f32,
        ))
    }

    /// Builds the luminance curve from the channels.
    ///
    /// The curve has a breakpoint at every x where any channel has one.
    pub fn luminance(&self, weights: &LuminanceWeights) -> Result<UnitMap> {
        weights.validate()?;
        let points = self
            .breakpoints()
            .into_iter()
            .map(|x| {
                let y = weights.red * self.red.evaluate(x)?
                    + weights.green * self.green.evaluate(x)?
                    + weights.blue() * self.blue.evaluate(x)?;
                Ok(DVec2::new(x, y.clamp(0.0, 1.0)))
            })
            .collect::<Result<Vec<_>>>()?;
        UnitMap::from_points(points)
    }

    /// Samples `size` evenly spaced colors into an 8-bit lookup table.
    ///
    /// Use `bytemuck::cast_slice` on the result to get raw RGBA bytes.
    #[allow(clippy::cast_precision_loss)]
    pub fn lookup_table(&self, size: usize) -> Result<Vec<Rgba8>> {
        if size < 2 {
            return Err(ChromalineError::InvalidParameter(format!(
                "lookup table needs at least 2 entries, got {size}"
            )));
        }
        let last = (size - 1) as f64;
        (0..size)
            .map(|i| Ok(Rgba8::from_vec3(self.sample(i as f64 / last)?)))
            .collect()
    }

    /// Converts every channel to segment triples.
    pub fn to_segment_data(&self) -> SegmentData {
        SegmentData {
            red: to_segments(&self.red),
            green: to_segments(&self.green),
            blue: to_segments(&self.blue),
        }
    }

    /// Builds a colormap from segment triples.
    pub fn from_segment_data(name: impl Into<String>, data: &SegmentData) -> Result<Self> {
        Ok(Self::from_channels(
            name,
            from_segments(&data.red)?,
            from_segments(&data.green)?,
            from_segments(&data.blue)?,
        ))
    }
}
