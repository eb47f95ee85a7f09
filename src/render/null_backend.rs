use std::cell::RefCell;
use std::rc::Rc;

use geojson::FeatureCollection;
use serde_json::Value;

use crate::error::{DashError, DashResult};
use crate::render::{RenderHost, RenderSurface};

/// Everything a [`NullSurface`] or [`NullHost`] observed, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Created {
        container: String,
    },
    OptionApplied {
        container: String,
        option: Value,
        not_merge: bool,
    },
    ActionDispatched {
        container: String,
        action: Value,
    },
    Resized {
        container: String,
    },
    Disposed {
        container: String,
    },
    MapRegistered {
        name: String,
        feature_count: usize,
    },
}

type SharedLog = Rc<RefCell<Vec<SurfaceEvent>>>;

/// No-op host used by tests and headless runs.
///
/// Clones share the event log, so tests keep a clone of the host they hand
/// to the dashboard and inspect the recorded traffic afterwards. Options
/// are still validated so tests catch malformed documents before a real
/// rendering bridge is attached.
#[derive(Debug, Clone, Default)]
pub struct NullHost {
    log: SharedLog,
}

impl NullHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every recorded event.
    #[must_use]
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.log.borrow().clone()
    }

    /// Option documents applied to one container, oldest first.
    #[must_use]
    pub fn options_for(&self, container: &str) -> Vec<Value> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::OptionApplied {
                    container: c,
                    option,
                    ..
                } if c == container => Some(option.clone()),
                _ => None,
            })
            .collect()
    }

    /// The most recent option applied to one container.
    #[must_use]
    pub fn last_option_for(&self, container: &str) -> Option<Value> {
        self.options_for(container).pop()
    }

    /// Actions dispatched to one container, oldest first.
    #[must_use]
    pub fn actions_for(&self, container: &str) -> Vec<Value> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::ActionDispatched {
                    container: c,
                    action,
                } if c == container => Some(action.clone()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn live_surface_count(&self, container: &str) -> usize {
        self.log
            .borrow()
            .iter()
            .map(|event| match event {
                SurfaceEvent::Created { container: c } if c == container => 1_isize,
                SurfaceEvent::Disposed { container: c } if c == container => -1,
                _ => 0,
            })
            .sum::<isize>()
            .max(0) as usize
    }

    #[must_use]
    pub fn registered_maps(&self) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::MapRegistered { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}

impl RenderHost for NullHost {
    type Surface = NullSurface;

    fn create(&mut self, container: &str) -> DashResult<NullSurface> {
        self.log.borrow_mut().push(SurfaceEvent::Created {
            container: container.to_owned(),
        });
        Ok(NullSurface {
            container: container.to_owned(),
            log: Rc::clone(&self.log),
            last_option: None,
            option_count: 0,
        })
    }

    fn register_map(&mut self, name: &str, geometry: &FeatureCollection) -> DashResult<()> {
        self.log.borrow_mut().push(SurfaceEvent::MapRegistered {
            name: name.to_owned(),
            feature_count: geometry.features.len(),
        });
        Ok(())
    }
}

/// Recording surface created by [`NullHost`].
#[derive(Debug)]
pub struct NullSurface {
    container: String,
    log: SharedLog,
    pub last_option: Option<Value>,
    pub option_count: usize,
}

impl RenderSurface for NullSurface {
    fn apply_option(&mut self, option: &Value, not_merge: bool) -> DashResult<()> {
        if !option.is_object() {
            return Err(DashError::Render(format!(
                "{}: option document must be an object",
                self.container
            )));
        }
        self.last_option = Some(option.clone());
        self.option_count += 1;
        self.log.borrow_mut().push(SurfaceEvent::OptionApplied {
            container: self.container.clone(),
            option: option.clone(),
            not_merge,
        });
        Ok(())
    }

    fn dispatch_action(&mut self, action: &Value) -> DashResult<()> {
        self.log.borrow_mut().push(SurfaceEvent::ActionDispatched {
            container: self.container.clone(),
            action: action.clone(),
        });
        Ok(())
    }

    fn resize(&mut self) {
        self.log.borrow_mut().push(SurfaceEvent::Resized {
            container: self.container.clone(),
        });
    }

    fn dispose(&mut self) {
        self.log.borrow_mut().push(SurfaceEvent::Disposed {
            container: self.container.clone(),
        });
    }
}
