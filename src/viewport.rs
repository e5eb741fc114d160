//! Viewport Classification - One Breakpoint Table
//!
//! Every component reads the same class. An off-by-one at a boundary
//! selects a visibly wrong image size, so boundaries are half-open and
//! exact: a width sitting on a threshold belongs to the larger class.

use serde::{Deserialize, Serialize};

/// Ordered viewport-width categories. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
    Fhd,
}

impl ViewportClass {
    /// Map a pixel width to its class. Total over all widths.
    pub fn classify(width: u32) -> Self {
        match width {
            0..=479 => Self::Xs,
            480..=639 => Self::Sm,
            640..=767 => Self::Md,
            768..=1023 => Self::Lg,
            1024..=1279 => Self::Xl,
            1280..=1535 => Self::Xxl,
            _ => Self::Fhd,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
            Self::Fhd => "fhd",
        }
    }
}

/// Handle returned by [`ViewportTracker::subscribe`]; pass it back to
/// [`ViewportTracker::unsubscribe`] on teardown.
pub type ListenerToken = u64;

/// Shared recompute-on-resize state.
///
/// Components subscribe once instead of installing their own resize
/// listeners; every subscription must be released with its token when
/// the dependent unmounts.
pub struct ViewportTracker {
    current: ViewportClass,
    next_token: ListenerToken,
    listeners: Vec<(ListenerToken, Box<dyn FnMut(ViewportClass)>)>,
}

impl ViewportTracker {
    pub fn new(initial_width: u32) -> Self {
        Self {
            current: ViewportClass::classify(initial_width),
            next_token: 0,
            listeners: Vec::new(),
        }
    }

    pub fn current(&self) -> ViewportClass {
        self.current
    }

    /// Feed a resize event. Listeners fire only on an actual class
    /// transition; returns the new class when one occurred.
    pub fn update(&mut self, width: u32) -> Option<ViewportClass> {
        let next = ViewportClass::classify(width);
        if next == self.current {
            return None;
        }
        self.current = next;
        for (_, listener) in &mut self.listeners {
            listener(next);
        }
        Some(next)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(ViewportClass) + 'static) -> ListenerToken {
        let token = self.next_token;
        self.next_token += 1;
        self.listeners.push((token, Box::new(listener)));
        token
    }

    /// Release a subscription. Returns false if the token was already
    /// released or never issued.
    pub fn unsubscribe(&mut self, token: ListenerToken) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(t, _)| *t != token);
        self.listeners.len() != before
    }
}
