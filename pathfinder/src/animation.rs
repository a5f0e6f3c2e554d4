use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
    algorithms::Visitor,
    grid::{Cell, Position},
};

pub const MAX_ANIMATION_SPEED: u16 = 200;
pub const PATH_STEP_DELAY: Duration = Duration::from_millis(50);

/// 0 disables suspension; higher is faster, capped at [`MAX_ANIMATION_SPEED`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationSpeed(u16);

impl AnimationSpeed {
    pub const INSTANT: Self = Self(0);

    pub fn new(speed: u16) -> Self {
        Self(speed.min(MAX_ANIMATION_SPEED))
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// pause after each expansion: `201 - speed` ms
    pub fn delay(self) -> Option<Duration> {
        match self.0 {
            0 => None,
            speed => Some(Duration::from_millis(
                u64::from(MAX_ANIMATION_SPEED + 1 - speed),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEvent {
    Visited(Position),
    Path(Position),
    Finished { success: bool },
}

/// paces a search for rendering: publishes each expansion, then sleeps
///
/// every subscriber gets its own unbounded queue, so a slow renderer never
/// loses a visit even when the search runs without suspending
pub struct Sequencer {
    speed: AnimationSpeed,
    subscribers: Vec<UnboundedSender<RenderEvent>>,
}

impl Sequencer {
    pub fn new(speed: AnimationSpeed) -> Self {
        Self {
            speed,
            subscribers: Vec::new(),
        }
    }

    pub fn speed(&self) -> AnimationSpeed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.speed = speed;
    }

    pub fn subscribe(&mut self) -> UnboundedReceiver<RenderEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// dropped receivers are pruned on the next publish
    fn publish(&mut self, event: RenderEvent) {
        self.subscribers.retain(|tx| match tx.send(event) {
            Ok(()) => true,
            Err(_) => {
                log::debug!("render subscriber went away");
                false
            }
        });
    }

    /// replays the final path one cell at a time
    pub async fn play_path(&mut self, path: &[Position]) {
        for &pos in path {
            self.publish(RenderEvent::Path(pos));
            if self.speed.delay().is_some() {
                tokio::time::sleep(PATH_STEP_DELAY).await;
            }
        }
    }

    pub fn finish(&mut self, success: bool) {
        self.publish(RenderEvent::Finished { success });
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(AnimationSpeed::INSTANT)
    }
}

impl Visitor for Sequencer {
    async fn visit(&mut self, cell: &Cell) {
        self.publish(RenderEvent::Visited(cell.position()));

        if let Some(delay) = self.speed.delay() {
            tokio::time::sleep(delay).await;
        }
    }
}
