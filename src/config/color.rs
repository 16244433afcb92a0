use palette::Srgb;
use serde::{Deserialize, Serialize};

/// An RGB color used for scoring bands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub Srgb<u8>);
