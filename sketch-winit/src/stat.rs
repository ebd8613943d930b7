use std::{collections::VecDeque, time::Instant};

const SLIDING_WINDOW_SIZE: usize = 60;

pub(crate) struct FrameStats {
    pub frame_count: u64,
    pub raster_time_sum: u64,
    pub window_raster_time_sum: u64,
    pub raster_time_low: u64,
    pub frame_time_ms_low: f32,

    window_samples: VecDeque<FrameStatSample>,
}

#[derive(Clone, Debug)]
pub(crate) struct FrameStatSample {
    pub(crate) timestamp: Instant,
    /// Microseconds spent encoding and rendering the scene.
    pub(crate) raster_time: u64,
}

impl FrameStats {
    pub(crate) fn new() -> Self {
        Self {
            frame_count: 0,
            raster_time_sum: 0,
            window_raster_time_sum: 0,
            raster_time_low: u64::MAX,
            frame_time_ms_low: f32::MAX,
            window_samples: VecDeque::with_capacity(SLIDING_WINDOW_SIZE),
        }
    }

    pub(crate) fn add_sample(&mut self, sample: FrameStatSample) {
        self.frame_count += 1;
        self.raster_time_sum += sample.raster_time;

        let oldest = if self.window_samples.len() >= SLIDING_WINDOW_SIZE {
            self.window_samples.pop_front()
        } else {
            None
        };
        self.window_raster_time_sum += sample.raster_time;
        self.window_samples.push_back(sample);
        if let Some(oldest) = oldest {
            self.window_raster_time_sum -= oldest.raster_time;
        }

        if self.window_samples.len() == SLIDING_WINDOW_SIZE {
            self.raster_time_low = self
                .raster_time_low
                .min(self.window_raster_time_sum / SLIDING_WINDOW_SIZE as u64);
            if let Some(frame_time_ms) = self.get_frame_time_ms_avg() {
                self.frame_time_ms_low = self.frame_time_ms_low.min(frame_time_ms);
            }
        }
    }

    pub(crate) fn get_frame_time_ms_avg(&self) -> Option<f32> {
        if self.window_samples.len() <= 1 {
            return None;
        }
        let (Some(back), Some(front)) = (self.window_samples.back(), self.window_samples.front())
        else {
            return None;
        };

        let frame_time_ms = back.timestamp.duration_since(front.timestamp).as_micros() as f32
            / (self.window_samples.len() - 1) as f32;
        Some(frame_time_ms / 1000.0)
    }

    pub(crate) fn get_raster_time_ms_avg(&self) -> Option<f32> {
        if self.window_samples.is_empty() {
            return None;
        }
        Some(self.window_raster_time_sum as f32 / self.window_samples.len() as f32 / 1000.0)
    }
}
