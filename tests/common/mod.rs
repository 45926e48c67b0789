//! Shared fixtures: an in-memory document, a recording tween engine, and a
//! recording mailer.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use vitrine::prelude::*;

#[derive(Debug, Default)]
struct FakeElement {
    selectors: Vec<String>,
    parent: Option<usize>,
    attributes: HashMap<String, String>,
    classes: HashSet<String>,
    text: String,
    value: String,
    enabled: bool,
    visible: bool,
    rect: Rect,
    offset_top: f32,
    height: f32,
}

/// In-memory page. Selector matching is exact-token: an element matches a
/// query when any of its registered selector tokens equals any
/// comma-separated token of the query.
pub struct FakeDocument {
    elements: Vec<FakeElement>,
    scroll_y: f32,
    viewport: Viewport,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            scroll_y: 0.0,
            viewport: Viewport::new(1000.0, 800.0),
        }
    }

    pub fn add(&mut self, selectors: &[&str]) -> ElementId {
        self.insert(selectors, None)
    }

    pub fn add_child(&mut self, parent: ElementId, selectors: &[&str]) -> ElementId {
        self.insert(selectors, Some(parent.0))
    }

    fn insert(&mut self, selectors: &[&str], parent: Option<usize>) -> ElementId {
        self.elements.push(FakeElement {
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            parent,
            enabled: true,
            visible: true,
            ..FakeElement::default()
        });
        ElementId(self.elements.len() - 1)
    }

    pub fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        self.elements[element.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn set_rect(&mut self, element: ElementId, rect: Rect) {
        self.elements[element.0].rect = rect;
    }

    pub fn set_offsets(&mut self, element: ElementId, offset_top: f32, height: f32) {
        let e = &mut self.elements[element.0];
        e.offset_top = offset_top;
        e.height = height;
    }

    pub fn set_value(&mut self, element: ElementId, value: &str) {
        self.elements[element.0].value = value.to_string();
    }

    pub fn set_element_text(&mut self, element: ElementId, text: &str) {
        self.elements[element.0].text = text.to_string();
    }

    pub fn set_scroll(&mut self, y: f32) {
        self.scroll_y = y;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn enabled(&self, element: ElementId) -> bool {
        self.elements[element.0].enabled
    }

    pub fn visible(&self, element: ElementId) -> bool {
        self.elements[element.0].visible
    }

    fn matches(&self, index: usize, query: &str) -> bool {
        query
            .split(',')
            .map(str::trim)
            .any(|token| self.elements[index].selectors.iter().any(|s| s == token))
    }

    fn is_descendant_of(&self, index: usize, root: usize) -> bool {
        let mut current = self.elements[index].parent;
        while let Some(parent) = current {
            if parent == root {
                return true;
            }
            current = self.elements[parent].parent;
        }
        false
    }
}

impl Document for FakeDocument {
    fn query(&self, selector: &str) -> Option<ElementId> {
        (0..self.elements.len())
            .find(|&i| self.matches(i, selector))
            .map(ElementId)
    }

    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        (0..self.elements.len())
            .filter(|&i| self.matches(i, selector))
            .map(ElementId)
            .collect()
    }

    fn query_within(&self, root: ElementId, selector: &str) -> Vec<ElementId> {
        (0..self.elements.len())
            .filter(|&i| self.matches(i, selector) && self.is_descendant_of(i, root.0))
            .map(ElementId)
            .collect()
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.elements[element.0].parent.map(ElementId)
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.elements[element.0].attributes.get(name).cloned()
    }

    fn bounding_rect(&self, element: ElementId) -> Rect {
        self.elements[element.0].rect
    }

    fn offset_top(&self, element: ElementId) -> f32 {
        self.elements[element.0].offset_top
    }

    fn client_height(&self, element: ElementId) -> f32 {
        self.elements[element.0].height
    }

    fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        self.elements[element.0].classes.insert(class.to_string());
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        self.elements[element.0].classes.remove(class);
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.elements[element.0].classes.contains(class)
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        self.elements[element.0].text = text.to_string();
    }

    fn text(&self, element: ElementId) -> String {
        self.elements[element.0].text.clone()
    }

    fn field_value(&self, element: ElementId) -> String {
        self.elements[element.0].value.clone()
    }

    fn set_field_value(&mut self, element: ElementId, value: &str) {
        self.elements[element.0].value = value.to_string();
    }

    fn set_enabled(&mut self, element: ElementId, enabled: bool) {
        self.elements[element.0].enabled = enabled;
    }

    fn set_visible(&mut self, element: ElementId, visible: bool) {
        self.elements[element.0].visible = visible;
    }
}

/// One recorded engine interaction.
#[derive(Debug)]
pub enum EngineCall {
    Run(Tween),
    Set(ElementId, Props),
    Bind(ScrollTriggerSpec, Tween),
}

/// Engine double that records every call and holds scheduled callbacks
/// until the test fires them.
#[derive(Default)]
pub struct RecordingEngine {
    pub calls: Vec<EngineCall>,
    scheduled: Vec<(f32, Box<dyn FnOnce()>)>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire all scheduled timeline callbacks, as the real engine would at
    /// the end of the timeline.
    pub fn fire_scheduled(&mut self) {
        for (_, callback) in self.scheduled.drain(..) {
            callback();
        }
    }

    pub fn scheduled_times(&self) -> Vec<f32> {
        self.scheduled.iter().map(|(at, _)| *at).collect()
    }

    pub fn runs(&self) -> Vec<&Tween> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                EngineCall::Run(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    pub fn binds(&self) -> Vec<(&ScrollTriggerSpec, &Tween)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                EngineCall::Bind(spec, t) => Some((spec, t)),
                _ => None,
            })
            .collect()
    }

    pub fn sets(&self) -> Vec<(ElementId, &Props)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                EngineCall::Set(target, props) => Some((*target, props)),
                _ => None,
            })
            .collect()
    }

    /// Last tween issued against a target, if any.
    pub fn last_run_for(&self, target: ElementId) -> Option<&Tween> {
        self.runs()
            .into_iter()
            .rev()
            .find(|t| t.targets.contains(&target))
    }
}

impl TweenEngine for RecordingEngine {
    fn run(&mut self, tween: Tween) {
        self.calls.push(EngineCall::Run(tween));
    }

    fn set(&mut self, target: ElementId, props: Props) {
        self.calls.push(EngineCall::Set(target, props));
    }

    fn bind(&mut self, trigger: ScrollTriggerSpec, tween: Tween) {
        self.calls.push(EngineCall::Bind(trigger, tween));
    }

    fn schedule_call(&mut self, at: f32, callback: Box<dyn FnOnce()>) {
        self.scheduled.push((at, callback));
    }
}

/// Mailer double: records requests, optionally failing the next send at
/// initiation time.
#[derive(Default)]
pub struct RecordingMailer {
    pub requests: Vec<SendRequest>,
    pub fail_next: Option<MailError>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MailService for RecordingMailer {
    fn send(&mut self, request: SendRequest) -> Result<(), MailError> {
        if let Some(error) = self.fail_next.take() {
            return Err(error);
        }
        self.requests.push(request);
        Ok(())
    }
}
