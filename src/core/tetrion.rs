//! Tetrion module - the per-player simulation state machine.
//!
//! A tetrion advances one fixed-rate frame at a time and is fully
//! deterministic: the same seed, start frame and input event stream produce
//! identical state on every machine. All randomness comes from two seeded
//! MT19937-64 instances owned by the tetrion, and all timing is counted in
//! whole frames. There are no suspension points inside a frame.

use std::collections::VecDeque;
use std::fmt;

use arrayvec::ArrayVec;

use crate::core::bag::BagQueue;
use crate::core::garbage::{self, GarbageSendEvent};
use crate::core::input::{Event, Key, KeyState, ALL_KEYS};
use crate::core::matrix::Matrix;
use crate::core::pieces;
use crate::core::rng::Mt64;
use crate::core::scoring;
use crate::core::snapshot::TetrionSnapshot;
use crate::core::tetromino::Tetromino;
use crate::core::timers::{
    DelayedAutoShiftState, EntryDelay, LineClearDelay, LineClearDelayState, LockDelayState,
    ShiftDirection,
};
use crate::types::{
    Action, RotationDirection, TetrominoType, GARBAGE_DELAY_FRAMES, HARD_DROP_SCORE_PER_ROW,
    MATRIX_HEIGHT, MATRIX_WIDTH, NUM_PREVIEW_PIECES, SOFT_DROP_SCORE_PER_ROW, VANISH_ZONE_ROWS,
};

/// Callback invoked synchronously for every emitted [`Action`].
pub type ActionHandler = Box<dyn FnMut(Action) + Send>;

/// Distinguishes gravity steps from player-driven soft drops; only the
/// latter score points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownMovementType {
    Gravity,
    SoftDrop,
}

/// Whether a tetrion simulates locally or mirrors a remote player.
///
/// Observers reject gameplay inputs and advance only by applying received
/// [`TetrionSnapshot`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetrionMode {
    LocalPlayer,
    Observer { client_id: u8, connected: bool },
}

/// One player's playfield plus all per-player simulation state.
pub struct Tetrion {
    mode: TetrionMode,
    player_name: String,
    matrix: Matrix,
    active_tetromino: Option<Tetromino>,
    ghost_tetromino: Option<Tetromino>,
    hold_piece: Option<TetrominoType>,
    previous_hold_piece: Option<TetrominoType>,
    is_hold_possible: bool,
    start_frame: u64,
    next_frame: u64,
    /// Key levels reconstructed from the event queue, updated every frame.
    current_key_state: KeyState,
    /// Key levels last seen by gameplay; presses during a delay window are
    /// picked up once the board unfreezes.
    last_key_state: KeyState,
    event_queue: VecDeque<Event>,
    bags_rng: Mt64,
    bag_queue: BagQueue,
    garbage_rng: Mt64,
    auto_shift: DelayedAutoShiftState,
    lock_delay: LockDelayState,
    entry_delay: EntryDelay,
    line_clear_delay: LineClearDelay,
    num_lines_cleared: u32,
    score: u64,
    next_gravity_frame: u64,
    is_soft_dropping: bool,
    game_over_since_frame: Option<u64>,
    garbage_receive_queue: VecDeque<GarbageSendEvent>,
    observer_preview: [TetrominoType; NUM_PREVIEW_PIECES],
    action_handler: Option<ActionHandler>,
}

impl Tetrion {
    /// Create a local-player tetrion. Gameplay begins at `start_frame`; the
    /// first piece spawns on the first simulated frame at or after it.
    pub fn new(seed: u64, start_frame: u64, player_name: impl Into<String>) -> Self {
        let mut bags_rng = Mt64::new(seed);
        let bag_queue = BagQueue::new(&mut bags_rng);
        Self {
            mode: TetrionMode::LocalPlayer,
            player_name: player_name.into(),
            matrix: Matrix::new(),
            active_tetromino: None,
            ghost_tetromino: None,
            hold_piece: None,
            previous_hold_piece: None,
            is_hold_possible: true,
            start_frame,
            next_frame: 0,
            current_key_state: KeyState::default(),
            last_key_state: KeyState::default(),
            event_queue: VecDeque::new(),
            garbage_rng: Mt64::new(seed),
            bags_rng,
            bag_queue,
            auto_shift: DelayedAutoShiftState::default(),
            lock_delay: LockDelayState::default(),
            entry_delay: EntryDelay::default(),
            line_clear_delay: LineClearDelay::default(),
            num_lines_cleared: 0,
            score: 0,
            next_gravity_frame: start_frame
                + scoring::gravity_delay_by_level(scoring::level_for_lines_cleared(0)),
            is_soft_dropping: false,
            game_over_since_frame: None,
            garbage_receive_queue: VecDeque::new(),
            observer_preview: [TetrominoType::I; NUM_PREVIEW_PIECES],
            action_handler: None,
        }
    }

    /// Create an observer tetrion mirroring the remote client `client_id`.
    pub fn new_observer(client_id: u8, player_name: impl Into<String>) -> Self {
        let mut tetrion = Self::new(0, 0, player_name);
        tetrion.mode = TetrionMode::Observer {
            client_id,
            connected: true,
        };
        tetrion
    }

    pub fn set_action_handler(&mut self, handler: impl FnMut(Action) + Send + 'static) {
        self.action_handler = Some(Box::new(handler));
    }

    pub fn clear_action_handler(&mut self) {
        self.action_handler = None;
    }

    /// Enqueue an input event. Events must arrive in non-decreasing frame
    /// order; same-frame events take effect in insertion order. Events for
    /// frames already simulated are ignored, as are all events on observers.
    pub fn enqueue_event(&mut self, event: Event) {
        if self.is_observer() || event.frame < self.next_frame {
            return;
        }
        self.event_queue.push_back(event);
    }

    /// Enqueue an incoming attack. The rows materialize
    /// [`GARBAGE_DELAY_FRAMES`] frames after the event's send frame.
    pub fn receive_garbage(&mut self, garbage: GarbageSendEvent) {
        if self.is_observer() {
            return;
        }
        self.garbage_receive_queue.push_back(garbage);
    }

    /// Drive the simulation until `next_frame` exceeds `target_frame`,
    /// returning any outgoing garbage produced along the way.
    pub fn simulate_up_until(&mut self, target_frame: u64) -> Vec<GarbageSendEvent> {
        let mut outgoing = Vec::new();
        while self.next_frame <= target_frame {
            let key_state = self.key_state_for_current_frame();
            if let Some(event) = self.simulate_next_frame(key_state) {
                outgoing.push(event);
            }
        }
        outgoing
    }

    /// Advance exactly one frame with the given key levels.
    pub fn simulate_next_frame(&mut self, key_state: KeyState) -> Option<GarbageSendEvent> {
        if self.is_observer() || self.is_game_over() {
            self.next_frame += 1;
            return None;
        }

        // A pending line clear freezes the board until its countdown runs out.
        if self.line_clear_delay.is_active() {
            let outgoing = match self.line_clear_delay.tick() {
                Some(lines) => {
                    let outgoing = self.clear_lines(&lines);
                    self.entry_delay.start();
                    outgoing
                }
                None => None,
            };
            self.next_frame += 1;
            return outgoing;
        }

        if self.entry_delay.is_active() {
            if !self.entry_delay.tick() {
                self.next_frame += 1;
                return None;
            }
            self.spawn_next_tetromino();
            if self.is_game_over() {
                self.next_frame += 1;
                return None;
            }
        }

        if self.active_tetromino.is_none() && self.next_frame >= self.start_frame {
            // First spawn of the session, before key processing so that
            // inputs on the spawn frame act on the fresh piece.
            self.spawn_next_tetromino();
            if self.is_game_over() {
                self.next_frame += 1;
                return None;
            }
        }

        self.apply_expired_garbage();
        if self.is_game_over() {
            self.next_frame += 1;
            return None;
        }

        self.process_keys(key_state);
        self.apply_gravity();
        self.update_lock_delay();
        self.refresh_ghost_tetromino();

        self.last_key_state = key_state;
        self.next_frame += 1;
        None
    }

    /// Apply a remote snapshot. Only observers mirror state this way.
    pub fn apply_snapshot(&mut self, snapshot: &TetrionSnapshot) {
        if !self.is_observer() {
            return;
        }
        self.next_frame = snapshot.frame;
        for y in 0..MATRIX_HEIGHT {
            for x in 0..MATRIX_WIDTH {
                let tag = snapshot.cells[y as usize][x as usize];
                self.matrix.set(x as i8, y as i8, TetrominoType::from_u8(tag));
            }
        }
        self.active_tetromino = snapshot.active.map(Into::into);
        self.ghost_tetromino = snapshot.ghost.map(Into::into);
        self.hold_piece = snapshot.hold;
        self.observer_preview = snapshot.preview;
        self.score = snapshot.score;
        self.num_lines_cleared = snapshot.num_lines_cleared;
        self.game_over_since_frame = snapshot.game_over_since_frame;
    }

    /// Capture the externally visible state for observers.
    pub fn snapshot(&self) -> TetrionSnapshot {
        let mut cells = [[0u8; MATRIX_WIDTH as usize]; MATRIX_HEIGHT as usize];
        for y in 0..MATRIX_HEIGHT {
            for x in 0..MATRIX_WIDTH {
                if let Some(Some(tetromino_type)) = self.matrix.get(x as i8, y as i8) {
                    cells[y as usize][x as usize] = tetromino_type.to_u8();
                }
            }
        }
        TetrionSnapshot {
            frame: self.next_frame,
            cells,
            active: self.active_tetromino.map(Into::into),
            ghost: self.ghost_tetromino.map(Into::into),
            hold: self.hold_piece,
            preview: self.preview_tetrominos(),
            score: self.score,
            num_lines_cleared: self.num_lines_cleared,
            game_over_since_frame: self.game_over_since_frame,
        }
    }

    // ---- accessors -------------------------------------------------------

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn matrix_mut(&mut self) -> &mut Matrix {
        &mut self.matrix
    }

    pub fn active_tetromino(&self) -> Option<Tetromino> {
        self.active_tetromino
    }

    pub fn ghost_tetromino(&self) -> Option<Tetromino> {
        self.ghost_tetromino
    }

    pub fn hold_piece(&self) -> Option<TetrominoType> {
        self.hold_piece
    }

    pub fn previous_hold_piece(&self) -> Option<TetrominoType> {
        self.previous_hold_piece
    }

    pub fn is_hold_possible(&self) -> bool {
        self.is_hold_possible
    }

    /// The next six pieces, fully determined by the seed and the number of
    /// pieces already drawn.
    pub fn preview_tetrominos(&self) -> [TetrominoType; NUM_PREVIEW_PIECES] {
        if self.is_observer() {
            return self.observer_preview;
        }
        self.bag_queue.preview()
    }

    pub fn line_clear_delay_state(&self) -> LineClearDelayState {
        self.line_clear_delay.state()
    }

    pub fn level(&self) -> u32 {
        scoring::level_for_lines_cleared(self.num_lines_cleared)
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn num_lines_cleared(&self) -> u32 {
        self.num_lines_cleared
    }

    pub fn game_over_since_frame(&self) -> Option<u64> {
        self.game_over_since_frame
    }

    pub fn next_frame(&self) -> u64 {
        self.next_frame
    }

    pub fn frames_until_game_start(&self) -> u64 {
        self.start_frame.saturating_sub(self.next_frame)
    }

    /// Total garbage lines currently queued against this tetrion.
    pub fn garbage_queue_length(&self) -> u32 {
        self.garbage_receive_queue
            .iter()
            .map(|event| event.num_lines)
            .sum()
    }

    pub fn garbage_queue_num_events(&self) -> usize {
        self.garbage_receive_queue.len()
    }

    pub fn garbage_queue_event(&self, index: usize) -> Option<GarbageSendEvent> {
        self.garbage_receive_queue.get(index).copied()
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn is_observer(&self) -> bool {
        matches!(self.mode, TetrionMode::Observer { .. })
    }

    pub fn is_connected(&self) -> bool {
        match self.mode {
            TetrionMode::LocalPlayer => true,
            TetrionMode::Observer { connected, .. } => connected,
        }
    }

    pub fn id(&self) -> u8 {
        match self.mode {
            TetrionMode::LocalPlayer => 0,
            TetrionMode::Observer { client_id, .. } => client_id,
        }
    }

    pub fn on_client_disconnected(&mut self, client_id: u8) {
        if let TetrionMode::Observer {
            client_id: own_id,
            connected,
        } = &mut self.mode
        {
            if *own_id == client_id {
                *connected = false;
            }
        }
    }

    fn is_game_over(&self) -> bool {
        self.game_over_since_frame.is_some()
    }

    // ---- per-frame internals --------------------------------------------

    /// Fold this frame's events onto the running key state. The queue is
    /// drained incrementally, so it stays O(pending events).
    fn key_state_for_current_frame(&mut self) -> KeyState {
        let mut key_state = self.current_key_state;
        while let Some(event) = self.event_queue.front().copied() {
            if event.frame > self.next_frame {
                break;
            }
            self.event_queue.pop_front();
            if event.frame == self.next_frame {
                key_state.apply(event);
            }
        }
        self.current_key_state = key_state;
        key_state
    }

    fn process_keys(&mut self, key_state: KeyState) {
        let mut shift_key_pressed = false;
        for key in ALL_KEYS {
            let was_pressed = self.last_key_state.is_pressed(key);
            let is_pressed = key_state.is_pressed(key);
            if is_pressed && !was_pressed {
                shift_key_pressed |= self.handle_key_press(key);
            } else if !is_pressed && was_pressed {
                self.handle_key_release(key);
            }
        }

        // The DAS charge starts counting on the frame after the key-down.
        if !shift_key_pressed {
            if let Some(direction) = self.auto_shift.tick() {
                match direction {
                    ShiftDirection::Left => self.move_left(),
                    ShiftDirection::Right => self.move_right(),
                }
            }
        }

        let soft_dropping = key_state.is_pressed(Key::Down);
        if soft_dropping && !self.is_soft_dropping {
            // Speed up the pending gravity step instead of waiting out the
            // full normal delay.
            let delay =
                scoring::soft_drop_gravity_delay(scoring::gravity_delay_by_level(self.level()));
            self.next_gravity_frame = self.next_gravity_frame.min(self.next_frame + delay);
        }
        self.is_soft_dropping = soft_dropping;
    }

    /// Returns true when the key set a DAS direction this frame.
    fn handle_key_press(&mut self, key: Key) -> bool {
        match key {
            Key::Left => {
                self.move_left();
                self.auto_shift.key_pressed(ShiftDirection::Left);
                true
            }
            Key::Right => {
                self.move_right();
                self.auto_shift.key_pressed(ShiftDirection::Right);
                true
            }
            Key::Down => false,
            Key::Drop => {
                self.hard_drop();
                false
            }
            Key::RotateClockwise => {
                self.rotate(RotationDirection::Clockwise);
                false
            }
            Key::RotateCounterClockwise => {
                self.rotate(RotationDirection::CounterClockwise);
                false
            }
            Key::Hold => {
                self.hold();
                false
            }
        }
    }

    fn handle_key_release(&mut self, key: Key) {
        match key {
            Key::Left => self.auto_shift.key_released(ShiftDirection::Left),
            Key::Right => self.auto_shift.key_released(ShiftDirection::Right),
            _ => {}
        }
    }

    fn apply_gravity(&mut self) {
        if self.active_tetromino.is_none() || self.next_frame < self.next_gravity_frame {
            return;
        }
        let base_delay = scoring::gravity_delay_by_level(self.level());
        let (movement_type, delay) = if self.is_soft_dropping {
            (
                DownMovementType::SoftDrop,
                scoring::soft_drop_gravity_delay(base_delay),
            )
        } else {
            (DownMovementType::Gravity, base_delay)
        };
        if self.move_down(movement_type) {
            self.next_gravity_frame = self.next_frame + delay;
        }
    }

    fn update_lock_delay(&mut self) {
        let Some(active) = self.active_tetromino else {
            return;
        };
        if self.is_tetromino_on_support(&active) {
            if self.lock_delay.on_supported() {
                self.emit_action(Action::Touch);
            }
            if self.lock_delay.tick() {
                self.freeze_and_destroy_active_tetromino();
            }
        } else {
            self.lock_delay.on_airborne();
        }
    }

    fn is_tetromino_on_support(&self, tetromino: &Tetromino) -> bool {
        self.matrix
            .collides(&tetromino.translated(0, 1).mino_positions())
    }

    fn move_left(&mut self) {
        let Some(active) = self.active_tetromino else {
            return;
        };
        let moved = active.translated(-1, 0);
        if self.matrix.collides(&moved.mino_positions()) {
            return;
        }
        self.active_tetromino = Some(moved);
        self.emit_action(Action::MoveLeft);
        if self.is_tetromino_on_support(&moved) {
            self.lock_delay.on_tetromino_moved();
        }
    }

    fn move_right(&mut self) {
        let Some(active) = self.active_tetromino else {
            return;
        };
        let moved = active.translated(1, 0);
        if self.matrix.collides(&moved.mino_positions()) {
            return;
        }
        self.active_tetromino = Some(moved);
        self.emit_action(Action::MoveRight);
        if self.is_tetromino_on_support(&moved) {
            self.lock_delay.on_tetromino_moved();
        }
    }

    fn move_down(&mut self, movement_type: DownMovementType) -> bool {
        let Some(active) = self.active_tetromino else {
            return false;
        };
        let moved = active.translated(0, 1);
        if self.matrix.collides(&moved.mino_positions()) {
            return false;
        }
        self.active_tetromino = Some(moved);
        if movement_type == DownMovementType::SoftDrop {
            self.score += SOFT_DROP_SCORE_PER_ROW;
            self.emit_action(Action::SoftDrop);
        }
        true
    }

    fn rotate(&mut self, direction: RotationDirection) {
        let Some(active) = self.active_tetromino else {
            return;
        };
        let rotated = active.rotated(direction);
        for &(dx, dy) in pieces::kick_offsets(active.tetromino_type, active.rotation, direction) {
            let candidate = rotated.translated(dx, dy);
            if self.matrix.collides(&candidate.mino_positions()) {
                continue;
            }
            self.active_tetromino = Some(candidate);
            self.emit_action(match direction {
                RotationDirection::Clockwise => Action::RotateClockwise,
                RotationDirection::CounterClockwise => Action::RotateCounterClockwise,
            });
            if self.is_tetromino_on_support(&candidate) {
                self.lock_delay.on_tetromino_moved();
            }
            return;
        }
    }

    fn hard_drop(&mut self) {
        let Some(mut active) = self.active_tetromino else {
            return;
        };
        let mut rows_dropped: u64 = 0;
        loop {
            let moved = active.translated(0, 1);
            if self.matrix.collides(&moved.mino_positions()) {
                break;
            }
            active = moved;
            rows_dropped += 1;
        }
        self.score += rows_dropped * HARD_DROP_SCORE_PER_ROW;
        self.active_tetromino = Some(active);
        self.emit_action(Action::HardDrop);
        self.freeze_and_destroy_active_tetromino();
    }

    /// Swap the active piece with the hold slot (drawing from the bag on
    /// first use). Allowed once per spawn and never while the board is
    /// frozen by a delay.
    fn hold(&mut self) {
        if !self.is_hold_possible
            || self.entry_delay.is_active()
            || self.line_clear_delay.is_active()
        {
            return;
        }
        let Some(active) = self.active_tetromino else {
            return;
        };
        self.previous_hold_piece = self.hold_piece;
        let next_type = match self.hold_piece {
            Some(held) => held,
            None => self.bag_queue.next(&mut self.bags_rng),
        };
        self.hold_piece = Some(active.tetromino_type);
        self.is_hold_possible = false;
        self.lock_delay.reset_for_new_tetromino();
        self.next_gravity_frame =
            self.next_frame + scoring::gravity_delay_by_level(self.level());
        let tetromino = Tetromino::spawned(next_type);
        if self.matrix.collides(&tetromino.mino_positions()) {
            self.set_game_over();
            return;
        }
        self.active_tetromino = Some(tetromino);
        self.refresh_ghost_tetromino();
    }

    fn spawn_next_tetromino(&mut self) {
        let tetromino_type = self.bag_queue.next(&mut self.bags_rng);
        let tetromino = Tetromino::spawned(tetromino_type);
        self.lock_delay.reset_for_new_tetromino();
        self.is_hold_possible = true;
        self.next_gravity_frame =
            self.next_frame + scoring::gravity_delay_by_level(self.level());
        if self.matrix.collides(&tetromino.mino_positions()) {
            self.set_game_over();
            return;
        }
        self.active_tetromino = Some(tetromino);
        self.refresh_ghost_tetromino();
    }

    fn freeze_and_destroy_active_tetromino(&mut self) {
        let Some(active) = self.active_tetromino.take() else {
            return;
        };
        self.ghost_tetromino = None;
        let positions = active.mino_positions();
        for &(x, y) in &positions {
            self.matrix.set(x, y, Some(active.tetromino_type));
        }
        // Lock-out: a piece frozen entirely inside the vanish zone ends the
        // game; a partially visible lock is fine.
        if positions.iter().all(|&(_, y)| y < VANISH_ZONE_ROWS as i8) {
            self.set_game_over();
            return;
        }
        if !self.determine_lines_to_clear() {
            self.entry_delay.start();
        }
    }

    /// Scan for full rows; if any, start the line-clear delay.
    fn determine_lines_to_clear(&mut self) -> bool {
        let mut lines = ArrayVec::<u8, 4>::new();
        for y in 0..MATRIX_HEIGHT {
            if self.matrix.is_row_full(y) {
                lines.push(y);
            }
        }
        if lines.is_empty() {
            return false;
        }
        self.line_clear_delay.start(lines);
        true
    }

    /// Remove the given rows (ascending), award points and report outgoing
    /// garbage. Runs when the line-clear delay expires.
    fn clear_lines(&mut self, lines: &[u8]) -> Option<GarbageSendEvent> {
        for &row in lines {
            self.matrix.clear_row(row);
            self.matrix.shift_down_above(row);
        }
        let level = self.level();
        self.score += scoring::score_for_lines_cleared(lines.len(), level);
        self.num_lines_cleared += lines.len() as u32;
        self.emit_action(Action::LinesCleared(lines.len() as u32));
        garbage::garbage_event_for_clear(lines.len(), self.next_frame)
    }

    fn apply_expired_garbage(&mut self) {
        while self
            .garbage_receive_queue
            .front()
            .is_some_and(|event| event.send_frame + GARBAGE_DELAY_FRAMES <= self.next_frame)
        {
            let Some(event) = self.garbage_receive_queue.pop_front() else {
                break;
            };
            let num_rows = event.num_lines.min(MATRIX_HEIGHT as u32) as u8;
            if (0..num_rows).any(|y| !self.matrix.is_row_empty(y)) {
                // Filled cells would be pushed past the top.
                self.set_game_over();
                return;
            }
            let hole_x = self.garbage_rng.next_range(MATRIX_WIDTH as u64) as u8;
            self.matrix.insert_garbage_rows(num_rows, hole_x);
            self.nudge_active_tetromino_up();
            if self.is_game_over() {
                return;
            }
        }
    }

    /// Rising garbage may overlap the active piece; push it up to the first
    /// free position, or end the game at the top.
    fn nudge_active_tetromino_up(&mut self) {
        let Some(active) = self.active_tetromino else {
            return;
        };
        let mut candidate = active;
        for _ in 0..=MATRIX_HEIGHT {
            if !self.matrix.collides(&candidate.mino_positions()) {
                self.active_tetromino = Some(candidate);
                return;
            }
            candidate = candidate.translated(0, -1);
        }
        self.set_game_over();
    }

    fn refresh_ghost_tetromino(&mut self) {
        let Some(active) = self.active_tetromino else {
            self.ghost_tetromino = None;
            return;
        };
        let mut ghost = active;
        loop {
            let moved = ghost.translated(0, 1);
            if self.matrix.collides(&moved.mino_positions()) {
                break;
            }
            ghost = moved;
        }
        self.ghost_tetromino = Some(ghost);
    }

    fn set_game_over(&mut self) {
        if self.game_over_since_frame.is_some() {
            return;
        }
        self.game_over_since_frame = Some(self.next_frame);
        self.active_tetromino = None;
        self.ghost_tetromino = None;
        self.emit_action(Action::GameOver);
    }

    fn emit_action(&mut self, action: Action) {
        if let Some(handler) = self.action_handler.as_mut() {
            handler(action);
        }
    }
}

impl fmt::Debug for Tetrion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tetrion")
            .field("mode", &self.mode)
            .field("player_name", &self.player_name)
            .field("next_frame", &self.next_frame)
            .field("score", &self.score)
            .field("num_lines_cleared", &self.num_lines_cleared)
            .field("game_over_since_frame", &self.game_over_since_frame)
            .finish_non_exhaustive()
    }
}
