//! Frame Writing
//!
//! JSON file output for frames: one numbered file per step in an output
//! directory, plus a `latest.json` that is overwritten each frame.

use std::fs;
use std::path::{Path, PathBuf};

use crate::driver::FrameSink;

use super::schemas::FrameSnapshot;

/// Write a frame to a file.
pub fn write_frame(frame: &FrameSnapshot, path: impl AsRef<Path>) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(frame)?;
    fs::write(path, json)?;
    Ok(())
}

/// A [`FrameSink`] that writes `frame_{step:06}.json` files into a
/// directory, creating the directory if absent.
pub struct JsonDirectorySink {
    dir: PathBuf,
    frames_written: u64,
}

impl JsonDirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            frames_written: 0,
        })
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FrameSink for JsonDirectorySink {
    fn accept(&mut self, frame: &FrameSnapshot) -> std::io::Result<()> {
        write_frame(frame, self.dir.join(format!("frame_{:06}.json", frame.step)))?;
        // Overwritten each frame so a live viewer can poll one path
        write_frame(frame, self.dir.join("latest.json"))?;
        self.frames_written += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Flock;
    use crate::config::SimConfig;
    use crate::output::frame_from_flock;

    #[test]
    fn test_sink_creates_dir_and_writes_frames() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("run").join("frames");

        let config = SimConfig {
            population: 3,
            ..Default::default()
        };
        let flock = Flock::from_config(config).unwrap();
        let frame = frame_from_flock(&flock);

        let mut sink = JsonDirectorySink::new(&dir).unwrap();
        sink.accept(&frame).unwrap();

        assert_eq!(sink.frames_written(), 1);
        let written = fs::read_to_string(dir.join("frame_000000.json")).unwrap();
        let parsed: FrameSnapshot = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.step, 0);
        assert_eq!(parsed.population, 3);
        assert!(dir.join("latest.json").exists());
    }
}
