//! Engine aggregate and event handlers
//!
//! Every handler follows the same pipeline: read the clock, decide quiet
//! mode, format the new value, settle any pair collapse it causes, start
//! the affected rows, then make sure a tick is pending.

use core::array;

use wordface_lexicon::{
    day_of_month_to_words, day_to_word, hour_to_12h_word, minute_to_formal_words,
    steps_to_magnitude, temperature_words, Word,
};

use super::tracking::LastSeen;
use crate::animation::RowAnimator;
use crate::config::{FaceConfig, WeatherCache};
use crate::layout::{CollisionOracle, PairDecision, PairId, PairedLine, PAIR_COUNT};
use crate::logging::{debug, trace};
use crate::scheduler::AnimationScheduler;
use crate::text::{row_text, RowText, StringSlot, ROW_CAPACITY};
use crate::traits::{
    DisplaySurface, LocalTime, RandomSource, RowId, TextMeasure, TimerService, WallClock,
    ROW_COUNT,
};

/// Collaborators handed to the engine at construction
pub struct Platform<D, M, T, C, R> {
    pub display: D,
    pub measure: M,
    pub timer: T,
    pub clock: C,
    pub rng: R,
}

/// Weather payload from the messaging collaborator
///
/// Either field may be missing from a given message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeatherUpdate<'a> {
    /// Temperature in °C
    pub temperature: Option<i32>,
    /// Short condition text
    pub condition: Option<&'a str>,
}

/// The watch face engine
pub struct WatchFace<D, M, T: TimerService, C, R> {
    config: FaceConfig,
    display: D,
    measure: M,
    clock: C,
    rng: R,
    scheduler: AnimationScheduler<T>,
    oracle: CollisionOracle,
    rows: [RowAnimator; ROW_COUNT],
    slots: [StringSlot<ROW_CAPACITY>; ROW_COUNT],
    pairs: [PairedLine; PAIR_COUNT],
    seen: LastSeen,
    cache: WeatherCache,
    weather_changed: bool,
    ready: bool,
}

impl<D, M, T, C, R> WatchFace<D, M, T, C, R>
where
    D: DisplaySurface,
    M: TextMeasure,
    T: TimerService,
    C: WallClock,
    R: RandomSource,
{
    /// Build the engine and format the initial clock rows
    ///
    /// `config` is expected to have passed [`FaceConfig::validate`]. A valid
    /// `cache` record pre-fills the temperature and condition rows.
    /// Nothing is drawn until [`on_appear`](Self::on_appear).
    pub fn new(
        config: FaceConfig,
        platform: Platform<D, M, T, C, R>,
        cache: Option<WeatherCache>,
    ) -> Self {
        let Platform {
            display,
            measure,
            timer,
            clock,
            rng,
        } = platform;
        let now = clock.now();

        let mut face = Self {
            rows: array::from_fn(|i| RowAnimator::for_row(RowId::ALL[i], &config)),
            slots: array::from_fn(|_| StringSlot::new()),
            pairs: array::from_fn(|i| PairedLine::new(PairId::ALL[i], &config.layout)),
            oracle: CollisionOracle::from_layout(&config.layout),
            scheduler: AnimationScheduler::new(timer, &config.animation, config.quiet),
            seen: LastSeen::default(),
            cache: WeatherCache::new(),
            weather_changed: false,
            ready: false,
            config,
            display,
            measure,
            clock,
            rng,
        };

        face.prepare_clock(&now);
        match cache {
            Some(cache) if cache.is_valid() => face.restore_weather(cache),
            Some(_) => debug!("ignoring weather cache with bad header"),
            None => {}
        }
        face
    }

    /// The display surface is up: lay out the pairs and reveal every row
    pub fn on_appear(&mut self) {
        self.ready = true;
        let (now, quiet) = self.begin();

        self.seen.weekday = Some(now.weekday);
        self.seen.day_of_month = Some(now.day_of_month);
        self.layout_pair(PairId::DayTemperature, now.weekday);
        self.layout_pair(PairId::DateCondition, now.day_of_month);
        if let Some(percent) = self.seen.battery {
            self.layout_pair(PairId::BatterySteps, percent);
        }

        let mut started = false;
        for row in RowId::ALL {
            let i = row.index();
            if !self.slots[i].has_value() {
                continue;
            }
            let text = self.slots[i].present();
            if quiet {
                self.rows[i].settle(text, &mut self.display);
            } else {
                self.rows[i].start(
                    text,
                    row.uses_fast_reveal(),
                    true,
                    &mut self.display,
                    &mut self.rng,
                );
                started |= self.rows[i].is_animating();
            }
        }
        self.kick(started, &now);
    }

    /// Minute tick from the clock source
    ///
    /// Returns true when a weather refresh should be requested.
    pub fn on_minute_tick(&mut self) -> bool {
        let (now, quiet) = self.begin();
        let mut started = false;

        let day_changed = self.seen.weekday != Some(now.weekday)
            || self.seen.day_of_month != Some(now.day_of_month);
        if day_changed || self.weather_changed {
            let temperature = self.left_candidate(RowId::Temperature);
            let condition = self.left_candidate(RowId::Condition);
            let day = self.evaluate_pair(PairId::DayTemperature, &temperature, now.weekday);
            let date = self.evaluate_pair(PairId::DateCondition, &condition, now.day_of_month);

            if day_changed || day.changed() {
                started |= self.show_right(PairId::DayTemperature, now.weekday, quiet);
            }
            if day_changed || date.changed() {
                started |= self.show_right(PairId::DateCondition, now.day_of_month, quiet);
            }
            self.seen.weekday = Some(now.weekday);
            self.seen.day_of_month = Some(now.day_of_month);
            self.weather_changed = false;
        }

        if self.seen.minute != Some(now.minute) {
            let (first, second) = minute_rows(now.minute);
            for (row, text) in [(RowId::FirstMinute, first), (RowId::SecondMinute, second)] {
                // Before the first appearance only the slot holds the row
                let current = if self.ready {
                    self.display.text(row)
                } else {
                    self.slots[row.index()].latest()
                };
                if current != text.as_str() {
                    started |= self.show(row, &text, true, quiet);
                }
            }
            self.seen.minute = Some(now.minute);
        }

        if self.seen.hour != Some(now.hour) {
            let text = hour_to_12h_word(now.hour);
            started |= self.show(RowId::Hour, &text, false, quiet);
            self.seen.hour = Some(now.hour);
        }

        self.kick(started, &now);
        now.minute % self.config.updates.weather_refresh_min.max(1) == 0
    }

    /// Battery level report
    pub fn on_battery(&mut self, percent: u8) {
        let (now, quiet) = self.begin();

        let started = if self.seen.battery != Some(percent) {
            let steps = self.left_candidate(RowId::Steps);
            self.evaluate_pair(PairId::BatterySteps, &steps, percent);
            self.seen.battery = Some(percent);
            self.show_right(PairId::BatterySteps, percent, quiet)
        } else {
            // The steps text may have shrunk since the battery collapsed
            self.rebalance(PairId::BatterySteps, percent, quiet)
        };
        self.kick(started, &now);
    }

    /// Step count report; `None` when the metric is unavailable
    pub fn on_steps(&mut self, steps: Option<u32>) {
        let Some(steps) = steps else {
            debug!("step count unavailable");
            return;
        };
        let (now, quiet) = self.begin();
        if self.seen.steps == Some(steps) {
            return;
        }
        if !self
            .seen
            .step_update_due(now.minute, self.config.updates.step_interval_min)
        {
            debug!("step update throttled");
            return;
        }

        let text = steps_to_magnitude(steps);
        let mut started = self.show(RowId::Steps, &text, false, quiet);
        self.seen.steps = Some(steps);
        self.seen.step_minute = Some(now.minute);

        if let Some(percent) = self.seen.battery {
            started |= self.rebalance(PairId::BatterySteps, percent, quiet);
        }
        self.kick(started, &now);
    }

    /// Weather message from the phone
    pub fn on_weather(&mut self, update: WeatherUpdate<'_>) {
        let (now, quiet) = self.begin();
        let mut started = false;

        if let Some(temperature) = update.temperature {
            if self.seen.temperature != Some(temperature) {
                let text = temperature_words(temperature);
                if self
                    .evaluate_pair(PairId::DayTemperature, &text, now.weekday)
                    .changed()
                {
                    started |= self.show_right(PairId::DayTemperature, now.weekday, quiet);
                }
                started |= self.show(RowId::Temperature, &text, false, quiet);
                self.seen.temperature = Some(temperature);
                self.cache.temperature = Some(temperature);
                self.weather_changed = true;
            }
        }

        if let Some(condition) = update.condition {
            self.cache.set_condition(condition);
            let text = row_text(self.cache.condition.as_deref().unwrap_or(""));
            if self
                .evaluate_pair(PairId::DateCondition, &text, now.day_of_month)
                .changed()
            {
                started |= self.show_right(PairId::DateCondition, now.day_of_month, quiet);
            }
            started |= self.show(RowId::Condition, &text, false, quiet);
            self.weather_changed = true;
        }

        self.kick(started, &now);
    }

    /// A timer armed by the scheduler fired
    pub fn on_timer(&mut self, handle: T::Handle) {
        if !self.scheduler.accept(handle) {
            return;
        }
        let now = self.clock.now();
        if self.scheduler.refresh_quiet(&now) {
            debug!("quiet window reached, settling rows");
            for row in self.rows.iter_mut() {
                row.finish(&mut self.display);
            }
            return;
        }

        let mut any_animating = false;
        for row in self.rows.iter_mut() {
            any_animating |= row.advance(&mut self.display, &mut self.rng);
        }
        self.scheduler.finish_tick(any_animating);
    }

    /// Cancel any pending tick
    pub fn shutdown(&mut self) {
        self.scheduler.cancel();
    }

    /// Tear down the engine and hand the collaborators back
    pub fn into_parts(self) -> Platform<D, M, T, C, R> {
        let Self {
            display,
            measure,
            scheduler,
            clock,
            rng,
            ..
        } = self;
        Platform {
            display,
            measure,
            timer: scheduler.into_timer(),
            clock,
            rng,
        }
    }

    /// Text currently on the display for `row`
    pub fn row_text(&self, row: RowId) -> &str {
        self.display.text(row)
    }

    /// Text `row` is animating towards
    pub fn row_target(&self, row: RowId) -> &str {
        self.rows[row.index()].target()
    }

    /// Most recently formatted value for `row`, shown or not
    pub fn row_value(&self, row: RowId) -> &str {
        self.slots[row.index()].latest()
    }

    pub fn is_collapsed(&self, pair: PairId) -> bool {
        self.pairs[pair.index()].is_collapsed()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// A weather update is waiting to be folded into the day/date rows
    pub fn weather_changed(&self) -> bool {
        self.weather_changed
    }

    /// Weather record to persist
    pub fn weather_cache(&self) -> &WeatherCache {
        &self.cache
    }

    pub fn last_seen(&self) -> &LastSeen {
        &self.seen
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &AnimationScheduler<T> {
        &self.scheduler
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    fn begin(&mut self) -> (LocalTime, bool) {
        let now = self.clock.now();
        let quiet = self.scheduler.refresh_quiet(&now);
        (now, quiet)
    }

    fn kick(&mut self, started: bool, now: &LocalTime) {
        if started {
            self.scheduler.ensure_running(now);
        }
    }

    fn prepare_clock(&mut self, now: &LocalTime) {
        let (first, second) = minute_rows(now.minute);
        self.slots[RowId::Hour.index()].write(&hour_to_12h_word(now.hour));
        self.slots[RowId::FirstMinute.index()].write(&first);
        self.slots[RowId::SecondMinute.index()].write(&second);
        self.slots[RowId::Day.index()].write(&day_to_word(now.weekday));
        self.slots[RowId::Date.index()].write(&day_of_month_to_words(now.day_of_month));

        self.seen.hour = Some(now.hour);
        self.seen.minute = Some(now.minute);
        self.seen.weekday = Some(now.weekday);
        self.seen.day_of_month = Some(now.day_of_month);
    }

    fn restore_weather(&mut self, cache: WeatherCache) {
        if let Some(temperature) = cache.temperature {
            self.slots[RowId::Temperature.index()].write(&temperature_words(temperature));
            self.seen.temperature = Some(temperature);
        }
        if let Some(condition) = &cache.condition {
            self.slots[RowId::Condition.index()].write(condition);
        }
        self.cache = cache;
    }

    /// Text the left row of a pair is moving to
    fn left_candidate(&self, row: RowId) -> RowText {
        row_text(self.slots[row.index()].latest())
    }

    /// Run the collision check for a pair; before the surface is up there
    /// is no geometry and nothing collides
    fn evaluate_pair(&mut self, id: PairId, left: &str, value: u8) -> PairDecision {
        let pair = &mut self.pairs[id.index()];
        let decision = if self.ready {
            let full = pair.full_text(value);
            pair.evaluate(
                &self.oracle,
                &self.measure,
                self.config.layout.screen_width,
                left,
                &full,
            )
        } else {
            pair.transition(false)
        };

        match decision {
            PairDecision::Collapse => debug!("{} collapsed", id),
            PairDecision::Expand => debug!("{} expanded", id),
            PairDecision::Unchanged => {}
        }
        decision
    }

    /// Re-check a pair against its current left text, redrawing the right
    /// side if the form changes
    fn rebalance(&mut self, id: PairId, value: u8, quiet: bool) -> bool {
        let left_row = self.pairs[id.index()].spec().left;
        let left = self.left_candidate(left_row);
        if self.evaluate_pair(id, &left, value).changed() {
            self.show_right(id, value, quiet)
        } else {
            false
        }
    }

    /// Format the right side of a pair into its slot without drawing it
    fn layout_pair(&mut self, id: PairId, value: u8) {
        let left_row = self.pairs[id.index()].spec().left;
        let left = self.left_candidate(left_row);
        self.evaluate_pair(id, &left, value);
        let pair = &self.pairs[id.index()];
        let text = pair.right_text(value);
        self.slots[pair.spec().right.index()].write(&text);
    }

    fn show_right(&mut self, id: PairId, value: u8, quiet: bool) -> bool {
        let pair = &self.pairs[id.index()];
        let right = pair.spec().right;
        let text = pair.right_text(value);
        self.show(right, &text, false, quiet)
    }

    /// Store `text` for `row` and move the row to it
    ///
    /// Before the surface appears the value is only stored. In quiet mode
    /// it is written straight to the display. Returns true if the row is
    /// now animating.
    fn show(&mut self, row: RowId, text: &str, force_restart: bool, quiet: bool) -> bool {
        let i = row.index();
        self.slots[i].write(text);
        if !self.ready {
            return false;
        }

        let shown = self.slots[i].present();
        if quiet {
            trace!("quiet mode, writing {} directly", row);
            self.rows[i].settle(shown, &mut self.display);
            false
        } else {
            self.rows[i].start(shown, false, force_restart, &mut self.display, &mut self.rng);
            self.rows[i].is_animating()
        }
    }
}

/// Minute text for the two minute rows
///
/// Minutes one to nine read "oh" / "seven".
fn minute_rows(minute: u8) -> (Word, Word) {
    let (tens, units) = minute_to_formal_words(minute);
    if (1..=9).contains(&(minute % 60)) {
        let mut oh = Word::new();
        let _ = oh.push_str("oh");
        (oh, tens)
    } else {
        (tens, units)
    }
}
