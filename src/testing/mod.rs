mod fake_profile_lookup;
mod fixtures;
mod recording_host;

pub use fake_profile_lookup::FakeProfileLookup;
pub use fixtures::{TEST_CONFIG, context_in, write_file};
pub use recording_host::RecordingHost;
