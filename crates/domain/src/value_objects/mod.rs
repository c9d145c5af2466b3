//! Value objects - Immutable objects defined by their attributes

mod voice_profile;

pub use voice_profile::VoiceProfile;
