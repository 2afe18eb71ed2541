use std::fmt;

use thiserror::Error;

/// Geometry of a single display as reported by the windowing system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub name: Option<String>,
}

impl Monitor {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Display for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} {}x{}", self.x, self.y, self.width, self.height)?;
        if let Some(name) = &self.name {
            write!(f, " ({name})")?;
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonitorError {
    #[error("No monitors detected.")]
    NoneDetected,
}

/// Where the black window goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement<'a> {
    pub index: usize,
    pub monitor: &'a Monitor,
    /// The requested index did not exist and the primary was used instead.
    pub fell_back: bool,
}

impl Placement<'_> {
    /// `(x, y, width, height)` of the window, identical to the monitor geometry.
    pub fn bounds(&self) -> (i32, i32, u32, u32) {
        (
            self.monitor.x,
            self.monitor.y,
            self.monitor.width,
            self.monitor.height,
        )
    }
}

/// Pick the monitor for `requested`, falling back to the primary (index 0)
/// for negative or out-of-range indices.
pub fn select(monitors: &[Monitor], requested: i64) -> Result<Placement<'_>, MonitorError> {
    if monitors.is_empty() {
        return Err(MonitorError::NoneDetected);
    }

    match usize::try_from(requested)
        .ok()
        .and_then(|i| monitors.get(i).map(|m| (i, m)))
    {
        Some((index, monitor)) => Ok(Placement {
            index,
            monitor,
            fell_back: false,
        }),
        None => {
            tracing::warn!(
                requested,
                available = monitors.len(),
                "Requested monitor {requested} not found, falling back to primary (0)."
            );
            Ok(Placement {
                index: 0,
                monitor: &monitors[0],
                fell_back: true,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dual_setup() -> Vec<Monitor> {
        vec![
            Monitor::new(0, 0, 2560, 1440).with_name("DP-1"),
            Monitor::new(2560, -200, 1920, 1080).with_name("HDMI-1"),
        ]
    }

    #[test]
    fn valid_index_uses_exact_monitor_geometry() {
        let monitors = dual_setup();
        for (i, monitor) in monitors.iter().enumerate() {
            let placement = select(&monitors, i as i64).unwrap();
            assert_eq!(placement.index, i);
            assert!(!placement.fell_back);
            assert_eq!(
                placement.bounds(),
                (monitor.x, monitor.y, monitor.width, monitor.height)
            );
        }
    }

    #[test]
    fn out_of_range_falls_back_to_primary() {
        let monitors = dual_setup();
        let placement = select(&monitors, 7).unwrap();
        assert_eq!(placement.index, 0);
        assert!(placement.fell_back);
        assert_eq!(placement.bounds(), (0, 0, 2560, 1440));
    }

    #[test]
    fn negative_index_falls_back_to_primary() {
        let monitors = dual_setup();
        let placement = select(&monitors, -1).unwrap();
        assert_eq!(placement.index, 0);
        assert!(placement.fell_back);
    }

    #[test]
    fn single_monitor_default_second_index_falls_back() {
        let monitors = vec![Monitor::new(0, 0, 1280, 800)];
        let placement = select(&monitors, 1).unwrap();
        assert!(placement.fell_back);
        assert_eq!(placement.monitor, &monitors[0]);
    }

    #[test]
    fn no_monitors_is_an_error() {
        assert_eq!(select(&[], 0), Err(MonitorError::NoneDetected));
    }

    #[test]
    fn display_includes_name_when_known() {
        let m = Monitor::new(2560, -200, 1920, 1080).with_name("HDMI-1");
        assert_eq!(m.to_string(), "2560,-200 1920x1080 (HDMI-1)");
        assert_eq!(Monitor::new(0, 0, 800, 480).to_string(), "0,0 800x480");
    }
}
