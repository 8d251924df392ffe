//! The slide-panel container: gesture dispatch, state machine, and the
//! programmatic control surface.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use slidekit_animation::SlideAnimation;
use slidekit_core::{
    apply_drag, clamp_offset, decide_on_fling, decide_on_release, Action, Axis, Edge, EdgeMap,
    FlingResponse, MenuStyle, Point, ReleaseDecision, Size, SlideState, StateCell, Target,
};
use slidekit_foundation::{
    Classification, Commit, DragZone, EdgeDragClassifier, Gesture, GestureDetector, PointerEvent,
};

use crate::boundary::{AnimationDriver, CancelTarget, DispatchOutcome, LayoutTarget, PanelObserver};
use crate::config::PanelConfig;
use crate::placement::{place_content, place_edge};

struct MenuState {
    style: MenuStyle,
    /// The menu surface is listed after the content and draws above it.
    above_content: bool,
}

/// The container widget core.
///
/// Owns the `(offset_x, offset_y, action, target)` tuple exclusively; all
/// mutation happens through pointer dispatch, animation frames, or the
/// programmatic surface, on the host's event thread. Operations whose
/// precondition state does not hold are silent no-ops.
pub struct SlidePanel {
    drag_enabled: bool,
    menus: EdgeMap<Option<MenuState>>,
    viewport: Size,
    state: StateCell,
    offset_x: i32,
    offset_y: i32,
    classifier: EdgeDragClassifier,
    detector: GestureDetector,
    animation: Option<SlideAnimation>,
    /// Discard the next scroll after an edge-drag commit; the commit
    /// already applied that distance.
    absorb_scroll: bool,
    layout: Rc<RefCell<dyn LayoutTarget>>,
    driver: Rc<RefCell<dyn AnimationDriver>>,
    observer: Option<Weak<dyn PanelObserver>>,
}

impl SlidePanel {
    pub fn new(
        config: PanelConfig,
        layout: Rc<RefCell<dyn LayoutTarget>>,
        driver: Rc<RefCell<dyn AnimationDriver>>,
    ) -> Self {
        let mut menus: EdgeMap<Option<MenuState>> = EdgeMap::default();
        for edge in Edge::ALL {
            if let Some(slot) = config.slot(edge) {
                menus.set(
                    edge,
                    Some(MenuState {
                        style: slot.style.clone(),
                        above_content: slot.child > config.content_child,
                    }),
                );
            }
        }

        Self {
            drag_enabled: config.drag_enabled,
            menus,
            viewport: Size::ZERO,
            state: StateCell::new(),
            offset_x: 0,
            offset_y: 0,
            classifier: EdgeDragClassifier::new(),
            detector: GestureDetector::new(),
            animation: None,
            absorb_scroll: false,
            layout,
            driver,
            observer: None,
        }
    }

    // ---- observers & accessors -------------------------------------------

    /// Registers the observer through a weak handle; the host keeps the
    /// strong reference and may drop it at any time.
    pub fn set_observer(&mut self, observer: &Rc<impl PanelObserver + 'static>) {
        let strong: Rc<dyn PanelObserver> = observer.clone();
        let weak: Weak<dyn PanelObserver> = Rc::downgrade(&strong);
        self.observer = Some(weak);
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn state(&self) -> SlideState {
        self.state.get()
    }

    /// The packed boundary encoding of the current state.
    pub fn packed_state(&self) -> u8 {
        self.state.get().packed()
    }

    pub fn is_state(&self, action: Action, target: Target) -> bool {
        self.state.get().is(action, target)
    }

    pub fn offset_x(&self) -> i32 {
        self.offset_x
    }

    pub fn offset_y(&self) -> i32 {
        self.offset_y
    }

    pub fn is_drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag_enabled = enabled;
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The resolved style for a configured edge.
    pub fn menu_style(&self, edge: Edge) -> Option<&MenuStyle> {
        self.menus.get(edge).as_ref().map(|menu| &menu.style)
    }

    // ---- resize ----------------------------------------------------------

    /// Adopts a new container size: re-resolves every style against its
    /// axis extent and re-clamps the offsets. A fully shown menu snaps
    /// back to exactly its (possibly changed) bound.
    pub fn set_viewport(&mut self, viewport: Size) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;

        for edge in Edge::ALL {
            let extent = viewport.extent(edge.axis());
            if let Some(menu) = self.menus.get_mut(edge).as_mut() {
                menu.style.resolve(extent);
            }
        }

        let state = self.state.get();
        if let Some(edge) = state.target().edge() {
            if let Some(style) = self.menu_style(edge).cloned() {
                let offset = if state.action() == Action::Show {
                    edge.sign() * style.size()
                } else {
                    let extent = viewport.extent(edge.axis());
                    let dragging = state.action() == Action::Drag;
                    clamp_offset(edge, self.axis_offset(edge.axis()), &style, extent, dragging)
                };
                self.set_axis_offset(edge, offset);
                return;
            }
        }
        self.apply_layout();
    }

    // ---- pointer dispatch ------------------------------------------------

    /// Feeds one pointer event through the state machine.
    ///
    /// The panel marks the event consumed when it claims the gesture; the
    /// returned outcome carries the synthetic-cancel and parent-intercept
    /// requests for the host adapter.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> DispatchOutcome {
        let state = self.state.get();
        match state.action() {
            Action::Show => match state.target().edge() {
                None => self.on_event_showing_content(event),
                Some(edge) => self.on_event_showing_menu(edge, event),
            },
            Action::Drag => match state.target().edge() {
                Some(edge) => self.on_event_dragging(edge, event),
                None => DispatchOutcome::passthrough(),
            },
            // An open/close animation owns the panel; swallow the stream.
            Action::Open | Action::Close => {
                event.consume();
                DispatchOutcome::passthrough()
            }
        }
    }

    fn on_event_showing_content(&mut self, event: &PointerEvent) -> DispatchOutcome {
        if !self.drag_enabled {
            return DispatchOutcome::passthrough();
        }

        let zones = self.content_zones();
        match self.classifier.on_event(event, self.viewport, &zones) {
            Classification::None => DispatchOutcome::passthrough(),
            Classification::Commit(commit) => self.commit_from_content(commit, event),
        }
    }

    fn content_zones(&self) -> SmallVec<[DragZone; 4]> {
        Edge::ALL
            .iter()
            .filter_map(|&edge| {
                self.menus.get(edge).as_ref().map(|menu| DragZone {
                    edge,
                    band: menu.style.drag_edge_width as f32,
                    touch_slop: menu.style.touch_slop as f32,
                    pull_back: false,
                })
            })
            .collect()
    }

    /// An armed edge drag broke its slop while content was showing.
    fn commit_from_content(&mut self, commit: Commit, event: &PointerEvent) -> DispatchOutcome {
        let edge = commit.edge;
        let Some(style) = self.menu_style(edge).cloned() else {
            return DispatchOutcome::passthrough();
        };

        // A commit takes the gesture over from any in-flight animation.
        self.animation = None;

        let extent = self.viewport.extent(edge.axis());
        let current = self.axis_offset(edge.axis());
        let offset = clamp_offset(
            edge,
            current + edge.sign() * commit.distance as i32,
            &style,
            extent,
            false,
        );

        let reached_bound = offset == edge.sign() * style.size();
        let action = if reached_bound {
            Action::Show
        } else {
            Action::Drag
        };
        log::debug!("drag commit on {edge:?}, offset {offset}");

        self.set_state(action, edge.target());
        self.set_axis_offset(edge, offset);
        self.notify_offset(edge);

        // The rest of the sequence belongs to the drag detector.
        self.detector.begin_scrolled(commit.position, event.time_ms);
        self.absorb_scroll = true;

        event.consume();
        DispatchOutcome {
            cancel: Some(CancelTarget::Content),
            disallow_parent_intercept: action == Action::Drag,
        }
    }

    fn on_event_showing_menu(&mut self, edge: Edge, event: &PointerEvent) -> DispatchOutcome {
        let Some(style) = self.menu_style(edge).cloned() else {
            return DispatchOutcome::passthrough();
        };

        // A menu covering the full extent leaves no content strip to grab;
        // arm a pull-back drag on the menu's own trailing edge instead.
        if style.border_px() == 0 {
            let zones = [DragZone {
                edge,
                band: style.drag_edge_width as f32,
                touch_slop: style.touch_slop as f32,
                pull_back: true,
            }];
            if let Classification::Commit(commit) =
                self.classifier.on_event(event, self.viewport, &zones)
            {
                return self.commit_pull_back(commit, &style, event);
            }
        }

        if !self.drag_enabled {
            return DispatchOutcome::passthrough();
        }

        match self.detector.on_event(event) {
            Gesture::None => DispatchOutcome::passthrough(),
            Gesture::Scroll { dx, dy } => self.menu_scroll(edge, &style, dx, dy, event),
            Gesture::Release {
                velocity_x,
                velocity_y,
                is_tap,
                at,
            } => {
                if is_tap {
                    return self.menu_tap(edge, &style, at, event);
                }
                let velocity = Self::primary(edge.axis(), velocity_x, velocity_y);
                self.settle_release(edge, &style, velocity, event)
            }
        }
    }

    /// Pull-back commit: the pointer grabbed a full-extent menu and slid
    /// it toward content. The offset re-anchors on the absolute pointer
    /// position and the synthetic cancel goes to the menu surface.
    fn commit_pull_back(
        &mut self,
        commit: Commit,
        style: &MenuStyle,
        event: &PointerEvent,
    ) -> DispatchOutcome {
        let edge = commit.edge;
        self.animation = None;

        let extent = self.viewport.extent(edge.axis());
        let primary = Self::primary(edge.axis(), commit.position.x, commit.position.y);
        let raw = if edge.sign() > 0 {
            primary as i32
        } else {
            primary as i32 - extent
        };
        let offset = clamp_offset(edge, raw, style, extent, false);

        let action = if offset == edge.sign() * style.size() {
            Action::Show
        } else {
            Action::Drag
        };
        log::debug!("pull-back commit on {edge:?}, offset {offset}");

        self.set_state(action, edge.target());
        self.set_axis_offset(edge, offset);
        self.notify_offset(edge);

        event.consume();
        DispatchOutcome {
            cancel: Some(CancelTarget::Menu(edge)),
            disallow_parent_intercept: action == Action::Drag,
        }
    }

    /// Scroll while a menu is shown: a drag that started on the visible
    /// content strip and moves toward closing starts a live drag back.
    fn menu_scroll(
        &mut self,
        edge: Edge,
        style: &MenuStyle,
        dx: f32,
        dy: f32,
        event: &PointerEvent,
    ) -> DispatchOutcome {
        let Some(down) = self.detector.down_position() else {
            return DispatchOutcome::passthrough();
        };
        let extent = self.viewport.extent(edge.axis());
        let delta = Self::primary(edge.axis(), dx, dy);

        // Prev-minus-current deltas are positive while the pointer moves
        // left/up, so closing means the delta carries the edge's own sign.
        let closing = delta * edge.sign() as f32 > 0.0;
        if !Self::outside_menu(edge, down, style.size(), extent) || !closing {
            return DispatchOutcome::passthrough();
        }

        let current = self.axis_offset(edge.axis());
        let offset = apply_drag(edge, current, delta, style, extent, false);
        self.set_axis_offset(edge, offset);

        if offset != 0 {
            self.set_state(Action::Drag, edge.target());
        } else {
            self.set_state(Action::Show, Target::Content);
        }
        self.notify_offset(edge);

        event.consume();
        DispatchOutcome {
            cancel: Some(CancelTarget::Content),
            disallow_parent_intercept: offset != 0,
        }
    }

    /// Tap outside the shown menu closes it.
    fn menu_tap(
        &mut self,
        edge: Edge,
        style: &MenuStyle,
        at: Point,
        event: &PointerEvent,
    ) -> DispatchOutcome {
        let extent = self.viewport.extent(edge.axis());
        if Self::outside_menu(edge, at, style.size(), extent) {
            self.close_menu(edge, true);
            event.consume();
        }
        DispatchOutcome::passthrough()
    }

    fn on_event_dragging(&mut self, edge: Edge, event: &PointerEvent) -> DispatchOutcome {
        let Some(style) = self.menu_style(edge).cloned() else {
            return DispatchOutcome::passthrough();
        };

        // While dragging the panel owns the stream outright.
        event.consume();

        match self.detector.on_event(event) {
            Gesture::None => DispatchOutcome::passthrough(),
            Gesture::Scroll { dx, dy } => {
                if self.absorb_scroll {
                    // The commit already applied this distance.
                    self.absorb_scroll = false;
                    return DispatchOutcome::passthrough();
                }
                let extent = self.viewport.extent(edge.axis());
                let delta = Self::primary(edge.axis(), dx, dy);
                let current = self.axis_offset(edge.axis());
                let offset = apply_drag(edge, current, delta, &style, extent, true);
                self.set_axis_offset(edge, offset);
                self.notify_offset(edge);
                DispatchOutcome::passthrough()
            }
            Gesture::Release {
                velocity_x,
                velocity_y,
                ..
            } => {
                let velocity = Self::primary(edge.axis(), velocity_x, velocity_y);
                self.settle_release(edge, &style, velocity, event)
            }
        }
    }

    /// Common release handling for drags and shown menus: a qualifying
    /// fling wins, otherwise the release-position policy decides.
    fn settle_release(
        &mut self,
        edge: Edge,
        style: &MenuStyle,
        velocity: f32,
        event: &PointerEvent,
    ) -> DispatchOutcome {
        let offset = self.axis_offset(edge.axis());
        match decide_on_fling(edge, velocity, offset, style) {
            FlingResponse::Open => self.open_menu(edge, true),
            FlingResponse::Close => self.close_menu(edge, true),
            FlingResponse::AlreadyOpen => self.set_state(Action::Show, edge.target()),
            FlingResponse::AlreadyClosed => self.set_state(Action::Show, Target::Content),
            FlingResponse::Ignored => {
                // A release while simply showing the menu (no live drag)
                // settles nothing.
                if self.state.get().action() == Action::Drag {
                    match decide_on_release(offset, style) {
                        ReleaseDecision::Open => self.open_menu(edge, true),
                        ReleaseDecision::Close => self.close_menu(edge, true),
                    }
                }
            }
        }
        event.consume();
        DispatchOutcome::passthrough()
    }

    // ---- programmatic surface --------------------------------------------

    /// Opens a configured menu, animated or instant. A no-op unless the
    /// panel shows content or already drags this edge.
    pub fn open_menu(&mut self, edge: Edge, animate: bool) {
        let Some(style) = self.menu_style(edge).cloned() else {
            return;
        };
        let state = self.state.get();
        if !(state.is(Action::Show, Target::Content) || state.is(Action::Drag, edge.target())) {
            return;
        }

        let current = self.axis_offset(edge.axis());
        let animation = SlideAnimation::open(edge, current, &style);
        self.animation = None;

        if animate && !animation.is_instant() {
            self.set_state(Action::Open, edge.target());
            self.animation = Some(animation);
            self.driver.borrow_mut().request_frame();
        } else {
            // Nothing left to animate: apply the terminal state directly.
            self.set_state(Action::Show, edge.target());
            self.set_axis_offset(edge, animation.target_offset());
        }
    }

    /// Closes a menu, animated or instant. A no-op unless the menu is
    /// shown or mid-drag.
    pub fn close_menu(&mut self, edge: Edge, animate: bool) {
        let Some(style) = self.menu_style(edge).cloned() else {
            return;
        };
        let state = self.state.get();
        if !(state.is(Action::Show, edge.target()) || state.is(Action::Drag, edge.target())) {
            return;
        }

        let current = self.axis_offset(edge.axis());
        let animation = SlideAnimation::close(edge, current, &style);
        self.animation = None;

        if animate && !animation.is_instant() {
            self.set_state(Action::Close, edge.target());
            self.animation = Some(animation);
            self.driver.borrow_mut().request_frame();
        } else {
            self.set_state(Action::Show, Target::Content);
        }
    }

    /// Closes whichever menu is active; silent (no listener traffic) when
    /// content is already showing.
    pub fn close_all_menus(&mut self, animate: bool) {
        let state = self.state.get();
        if state.is(Action::Show, Target::Content) {
            return;
        }
        if let Some(edge) = state.target().edge() {
            self.close_menu(edge, animate);
        }
    }

    pub fn open_left_menu(&mut self, animate: bool) {
        self.open_menu(Edge::Left, animate);
    }

    pub fn open_right_menu(&mut self, animate: bool) {
        self.open_menu(Edge::Right, animate);
    }

    pub fn open_top_menu(&mut self, animate: bool) {
        self.open_menu(Edge::Top, animate);
    }

    pub fn open_bottom_menu(&mut self, animate: bool) {
        self.open_menu(Edge::Bottom, animate);
    }

    pub fn close_left_menu(&mut self, animate: bool) {
        self.close_menu(Edge::Left, animate);
    }

    pub fn close_right_menu(&mut self, animate: bool) {
        self.close_menu(Edge::Right, animate);
    }

    pub fn close_top_menu(&mut self, animate: bool) {
        self.close_menu(Edge::Top, animate);
    }

    pub fn close_bottom_menu(&mut self, animate: bool) {
        self.close_menu(Edge::Bottom, animate);
    }

    // ---- animation frames ------------------------------------------------

    /// Advances the in-flight animation to the host's frame time.
    ///
    /// Returns whether another frame was requested.
    pub fn on_frame(&mut self, now_ms: u64) -> bool {
        let (frame, edge, opening) = match self.animation.as_mut() {
            Some(animation) => (
                animation.sample(now_ms),
                animation.edge(),
                animation.opening(),
            ),
            None => return false,
        };

        if frame.finished {
            self.animation = None;
        }
        self.set_axis_offset(edge, frame.offset);
        self.notify_offset(edge);

        if frame.finished {
            let target = if opening {
                edge.target()
            } else {
                Target::Content
            };
            self.set_state(Action::Show, target);
            false
        } else {
            self.driver.borrow_mut().request_frame();
            true
        }
    }

    // ---- internals -------------------------------------------------------

    fn primary(axis: Axis, x: f32, y: f32) -> f32 {
        match axis {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        }
    }

    /// Whether a point lies on the content strip rather than the shown
    /// menu itself.
    fn outside_menu(edge: Edge, at: Point, size: i32, extent: i32) -> bool {
        let primary = Self::primary(edge.axis(), at.x, at.y);
        if edge.sign() > 0 {
            primary > size as f32
        } else {
            primary < (extent - size) as f32
        }
    }

    fn axis_offset(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.offset_x,
            Axis::Vertical => self.offset_y,
        }
    }

    /// Stores the offset and pushes fresh geometry to the layout target.
    fn set_axis_offset(&mut self, edge: Edge, offset: i32) {
        match edge.axis() {
            Axis::Horizontal => self.offset_x = offset,
            Axis::Vertical => self.offset_y = offset,
        }
        self.apply_layout();
    }

    fn apply_layout(&self) {
        let state = self.state.get();
        let placement = match state.target().edge() {
            Some(edge) => match self.menus.get(edge).as_ref() {
                Some(menu) => place_edge(
                    edge,
                    self.axis_offset(edge.axis()),
                    self.viewport,
                    &menu.style,
                    menu.above_content,
                ),
                None => return,
            },
            None => place_content(self.viewport),
        };
        self.layout.borrow_mut().apply(state.target(), &placement);
    }

    fn set_state(&mut self, action: Action, target: Target) {
        let next = SlideState::new(action, target);
        let previous = self.state.replace(next);
        log::trace!("state {previous:?} -> {next:?}");

        self.notify_state(previous.packed(), next.packed());
        self.classifier.reset();

        if action == Action::Show {
            if target == Target::Content {
                self.offset_x = 0;
                self.offset_y = 0;
                if let Some(previous_edge) = previous.target().edge() {
                    self.layout.borrow_mut().hide_menu(previous_edge);
                }
                self.apply_layout();
            } else {
                self.absorb_scroll = false;
            }
        }
    }

    fn notify_state(&self, previous: u8, current: u8) {
        if let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) {
            observer.on_state_changed(previous, current);
        }
    }

    /// Reports the normalized offset magnitudes for the active edge.
    fn notify_offset(&self, edge: Edge) {
        let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        let Some(style) = self.menu_style(edge) else {
            return;
        };

        let size = style.size();
        let value = if size > 0 {
            self.axis_offset(edge.axis()).abs() as f32 / size as f32
        } else {
            0.0
        };
        let (nx, ny) = match edge.axis() {
            Axis::Horizontal => (value, 0.0),
            Axis::Vertical => (0.0, value),
        };
        observer.on_offset_changed(nx, ny, self.state.get().packed());
    }
}
