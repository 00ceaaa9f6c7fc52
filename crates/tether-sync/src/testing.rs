//! Recording fakes for the platform traits.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tether_common::{
    PlatformError, PopupMessage, ScreenMetrics, ViewportRect, WindowRectSnapshot,
};
use tether_platform::{OpenerSurface, PopupChannel, PopupFeatures, PopupLauncher, PopupWindow};

pub(crate) struct FakeSurface {
    pub rect: Cell<WindowRectSnapshot>,
    pub anchor: ViewportRect,
    pub metrics: ScreenMetrics,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self {
            rect: Cell::new(WindowRectSnapshot {
                screen_x: 0,
                screen_y: 0,
                outer_width: 480,
                outer_height: 320,
            }),
            anchor: ViewportRect {
                left: 50.0,
                top: 48.0,
                right: 170.0,
                bottom: 80.0,
            },
            metrics: ScreenMetrics {
                avail_top: -1.0,
                device_pixel_ratio: 1.0,
            },
        }
    }

    pub fn move_to(&self, screen_x: i32, screen_y: i32) {
        let mut rect = self.rect.get();
        rect.screen_x = screen_x;
        rect.screen_y = screen_y;
        self.rect.set(rect);
    }
}

impl OpenerSurface for FakeSurface {
    fn window_rect(&self) -> WindowRectSnapshot {
        self.rect.get()
    }

    fn anchor_rect(&self) -> ViewportRect {
        self.anchor
    }

    fn screen_metrics(&self) -> ScreenMetrics {
        self.metrics
    }
}

#[derive(Clone, Default)]
pub(crate) struct RecordingChannel {
    pub sent: Rc<RefCell<Vec<PopupMessage>>>,
    pub disconnected: bool,
}

impl RecordingChannel {
    pub fn sent(&self) -> Vec<PopupMessage> {
        self.sent.borrow().clone()
    }
}

impl PopupChannel for RecordingChannel {
    fn post(&self, message: &PopupMessage) -> Result<(), PlatformError> {
        if self.disconnected {
            return Err(PlatformError::ChannelClosed("receiver dropped".into()));
        }
        self.sent.borrow_mut().push(*message);
        Ok(())
    }
}

/// Hands out clones of one channel, or nothing when `blocked`.
#[derive(Default)]
pub(crate) struct FakeLauncher {
    pub channel: RecordingChannel,
    pub blocked: bool,
    pub requests: Vec<PopupFeatures>,
}

impl PopupLauncher for FakeLauncher {
    type Channel = RecordingChannel;

    fn open(&mut self, features: &PopupFeatures) -> Option<RecordingChannel> {
        self.requests.push(features.clone());
        if self.blocked {
            None
        } else {
            Some(self.channel.clone())
        }
    }
}

pub(crate) struct FakeWindow {
    pub outer_width: i32,
    pub moves: RefCell<Vec<(i32, i32)>>,
    pub closes: Cell<u32>,
}

impl FakeWindow {
    pub fn with_outer_width(outer_width: i32) -> Self {
        Self {
            outer_width,
            moves: RefCell::new(Vec::new()),
            closes: Cell::new(0),
        }
    }
}

impl PopupWindow for FakeWindow {
    fn outer_width(&self) -> i32 {
        self.outer_width
    }

    fn move_to(&self, left: i32, top: i32) {
        self.moves.borrow_mut().push((left, top));
    }

    fn close(&self) {
        self.closes.set(self.closes.get() + 1);
    }
}
