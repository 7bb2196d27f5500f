use crate::foundation::error::{EaseflowError, EaseflowResult};

pub use kurbo::{CubicBez, Point, Vec2};

/// Number of independent value channels of an animated property.
///
/// All channels share one temporal curve; the host still expects one ease
/// value per channel. The count is resolved once per property by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ChannelCount {
    #[default]
    One,
    Two,
    Three,
}

impl ChannelCount {
    pub fn get(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    pub fn new(n: usize) -> EaseflowResult<Self> {
        match n {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(EaseflowError::validation(format!(
                "channel count must be 1, 2 or 3 (got {n})"
            ))),
        }
    }
}

impl TryFrom<u8> for ChannelCount {
    type Error = EaseflowError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(usize::from(n))
    }
}

impl From<ChannelCount> for u8 {
    fn from(c: ChannelCount) -> Self {
        c.get() as u8
    }
}
