// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for report runs
// reference: uses indicatif for progress bars and tracks resolution metrics

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    pub total_hits: usize,
    pub items_collected: usize,
    pub items_resolved: usize,
    pub images_inspected: usize,
    pub entries_retained: usize,
    pub assets_skipped: usize,
    pub duration_secs: u64,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items_per_second(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        self.items_resolved as f64 / self.duration_secs as f64
    }

    /// Share of inspected images that made it into the report.
    pub fn retention_rate(&self) -> f64 {
        if self.images_inspected == 0 {
            return 0.0;
        }
        (self.entries_retained as f64 / self.images_inspected as f64) * 100.0
    }
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    items_resolved: AtomicUsize,
    images_inspected: AtomicUsize,
    entries_retained: AtomicUsize,
    assets_skipped: AtomicUsize,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn with_color(total_items: usize, colored: bool) -> Self {
        let multi_progress = MultiProgress::new();
        Self::build(multi_progress, total_items, colored)
    }

    /// Tracker that counts but never draws.
    pub fn hidden(total_items: usize) -> Self {
        let multi_progress = MultiProgress::with_draw_target(ProgressDrawTarget::hidden());
        Self::build(multi_progress, total_items, false)
    }

    fn build(multi_progress: MultiProgress, total_items: usize, colored: bool) -> Self {
        let main_bar = create_progress_bar(&multi_progress, total_items as u64, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
            items_resolved: AtomicUsize::new(0),
            images_inspected: AtomicUsize::new(0),
            entries_retained: AtomicUsize::new(0),
            assets_skipped: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn inc_items_resolved(&self) {
        self.items_resolved.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn inc_images_inspected(&self) {
        self.images_inspected.fetch_add(1, Ordering::SeqCst);
    }

    pub fn inc_entries_retained(&self) {
        self.entries_retained.fetch_add(1, Ordering::SeqCst);
    }

    pub fn inc_assets_skipped(&self) {
        self.assets_skipped.fetch_add(1, Ordering::SeqCst);
    }

    pub fn finish(&self) {
        self.main_bar.finish_with_message("Resolution complete");
        self.detail_bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> PipelineStats {
        let duration = self.start_time.elapsed().as_secs();

        PipelineStats {
            items_resolved: self.items_resolved.load(Ordering::SeqCst),
            images_inspected: self.images_inspected.load(Ordering::SeqCst),
            entries_retained: self.entries_retained.load(Ordering::SeqCst),
            assets_skipped: self.assets_skipped.load(Ordering::SeqCst),
            duration_secs: duration,
            ..PipelineStats::default()
        }
    }

    fn update_detail_bar(&self) {
        let retained = self.entries_retained.load(Ordering::SeqCst);
        let skipped = self.assets_skipped.load(Ordering::SeqCst);

        let message = format!("Retained: {} | Skipped: {}", retained, skipped);

        self.detail_bar.set_message(message);
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    if colored {
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} items ({eta}) {msg}",
                )
                .expect("Failed to create progress bar template")
                .progress_chars("█▓▒░"),
        );
    } else {
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} items ({eta}) {msg}")
                .expect("Failed to create progress bar template")
                .progress_chars("=>-"),
        );
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    let style = ProgressStyle::default_bar()
        .template("{msg}")
        .expect("Failed to create detail bar template");
    bar.set_style(style);
    bar
}
