//! Scripted walkthrough of a full page session against in-memory host
//! implementations: intro, activation, scrolling, pointer play, and a
//! contact-form submission.
//!
//! Run with `RUST_LOG=debug cargo run --example walkthrough` to see the
//! orchestrator's own logging alongside the narration.

use std::collections::{HashMap, HashSet};

use vitrine::prelude::*;

#[derive(Default)]
struct Element {
    selectors: Vec<String>,
    parent: Option<usize>,
    attributes: HashMap<String, String>,
    classes: HashSet<String>,
    text: String,
    value: String,
    rect: Rect,
    offset_top: f32,
    height: f32,
}

/// Minimal in-memory page: selector matching is exact-token against the
/// comma-separated tokens of the query.
#[derive(Default)]
struct Page {
    elements: Vec<Element>,
    scroll_y: f32,
}

impl Page {
    fn add(&mut self, selectors: &[&str], parent: Option<ElementId>) -> ElementId {
        self.elements.push(Element {
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            parent: parent.map(|p| p.0),
            ..Element::default()
        });
        ElementId(self.elements.len() - 1)
    }

    fn matches(&self, index: usize, query: &str) -> bool {
        query
            .split(',')
            .map(str::trim)
            .any(|token| self.elements[index].selectors.iter().any(|s| s == token))
    }
}

impl Document for Page {
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
        self.query_all(selector)
            .into_iter()
            .filter(|&e| {
                let mut current = self.elements[e.0].parent;
                while let Some(p) = current {
                    if p == root.0 {
                        return true;
                    }
                    current = self.elements[p].parent;
                }
                false
            })
            .collect()
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.elements[element.0].parent.map(ElementId)
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.elements[element.0].attributes.get(name).cloned()
    }

    fn bounding_rect(&self, element: ElementId) -> Rect {
        let e = &self.elements[element.0];
        Rect::new(e.rect.x, e.offset_top - self.scroll_y, e.rect.width, e.height)
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
        Viewport::new(1280.0, 800.0)
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
        println!("  [dom] #{} enabled = {}", element.0, enabled);
    }

    fn set_visible(&mut self, element: ElementId, visible: bool) {
        println!("  [dom] #{} visible = {}", element.0, visible);
    }
}

/// Engine that narrates every request and holds timeline callbacks until
/// the script declares the intro finished.
#[derive(Default)]
struct NarratingEngine {
    scheduled: Vec<(f32, Box<dyn FnOnce()>)>,
}

impl NarratingEngine {
    fn finish_timeline(&mut self) {
        for (at, callback) in self.scheduled.drain(..) {
            println!("  [engine] timeline reached {:.2}s, firing callback", at);
            callback();
        }
    }
}

impl TweenEngine for NarratingEngine {
    fn run(&mut self, tween: Tween) {
        println!(
            "  [engine] tween {:?} on {} target(s), {:.2}s + {:.2}s delay",
            tween.direction,
            tween.targets.len(),
            tween.options.duration,
            tween.options.delay
        );
    }

    fn set(&mut self, target: ElementId, props: Props) {
        let values: Vec<String> = props
            .iter()
            .map(|(p, v)| format!("{:?}={:.1}", p, v))
            .collect();
        println!("  [engine] set #{}: {}", target.0, values.join(" "));
    }

    fn bind(&mut self, trigger: ScrollTriggerSpec, tween: Tween) {
        println!(
            "  [engine] bound {:?} trigger on #{} for {} target(s)",
            trigger.mode,
            trigger.trigger.0,
            tween.targets.len()
        );
    }

    fn schedule_call(&mut self, at: f32, callback: Box<dyn FnOnce()>) {
        self.scheduled.push((at, callback));
    }
}

struct NarratingMailer;

impl MailService for NarratingMailer {
    fn send(&mut self, request: SendRequest) -> Result<(), MailError> {
        println!(
            "  [mail] sending '{}' from {} <{}>",
            request.message, request.from_name, request.reply_to
        );
        Ok(())
    }
}

fn build_page() -> Page {
    let mut page = Page::default();

    page.add(&[".loader-bar"], None);
    page.add(&[".loader-text"], None);
    page.add(&[".loader"], None);
    for _ in 0..3 {
        page.add(&[".hero-title .line"], None);
    }
    page.add(&[".hero-subtitle"], None);
    page.add(&[".hero-cta"], None);

    let hero = page.add(&[".hero", "header"], None);
    page.elements[hero.0].height = 800.0;
    page.elements[hero.0].rect = Rect::new(0.0, 0.0, 1280.0, 800.0);
    page.add(&[".hero-bg"], Some(hero));

    let about = page.add(&["section", ".section"], None);
    page.elements[about.0].attributes.insert("id".into(), "about".into());
    page.elements[about.0].offset_top = 800.0;
    page.elements[about.0].height = 700.0;
    page.add(&[".section-header"], Some(about));
    page.add(&[".about-content p"], Some(about));
    let wrapper = page.add(&[".about-image-wrapper"], Some(about));
    page.elements[wrapper.0].offset_top = 900.0;
    page.elements[wrapper.0].height = 400.0;
    page.add(&[".about-image"], Some(wrapper));

    let link = page.add(&[".nav-link"], None);
    page.elements[link.0].attributes.insert("href".into(), "#about".into());

    let cta = page.add(&[".btn"], None);
    page.elements[cta.0].rect = Rect::new(100.0, 600.0, 160.0, 56.0);
    page.elements[cta.0].offset_top = 600.0;
    page.elements[cta.0].height = 56.0;
    let span = page.add(&["span"], Some(cta));
    page.elements[span.0].text = "View Work".into();

    let form = page.add(&["#contact-form"], None);
    for selector in ["#name", "#email", "#message"] {
        let group = page.add(&[".form-group"], Some(form));
        page.add(&[selector], Some(group));
        page.add(&[".error-message"], Some(group));
    }
    let submit = page.add(&["#submit-btn"], Some(form));
    let label = page.add(&["span"], Some(submit));
    page.elements[label.0].text = "Send Message".into();
    page.add(&["#form-status"], Some(form));

    page
}

fn main() {
    env_logger::init();

    let mut page = build_page();
    let mut engine = NarratingEngine::default();
    let mut mailer = NarratingMailer;
    let mut site = Site::new(
        SiteConfig::default()
            .mail_ids("demo_service", "demo_template")
            .recipient("Demo Owner"),
    );

    println!("== intro ==");
    site.start(&page, &mut engine);

    println!("== intro completes, first scroll activates the controllers ==");
    engine.finish_timeline();
    site.handle_event(PageEvent::Scroll, &mut page, &mut engine, &mut mailer);

    println!("== scrolling into the about section ==");
    page.scroll_y = 900.0;
    site.handle_event(PageEvent::Scroll, &mut page, &mut engine, &mut mailer);
    let link = page.query(".nav-link").expect("nav link");
    println!("  nav link active: {}", page.has_class(link, "active"));

    println!("== pointer plays over the magnetic button ==");
    page.scroll_y = 560.0;
    site.handle_event(
        PageEvent::PointerMove { x: 210.0, y: 60.0 },
        &mut page,
        &mut engine,
        &mut mailer,
    );
    site.handle_event(PageEvent::PointerLeave, &mut page, &mut engine, &mut mailer);

    println!("== submitting the contact form ==");
    let name = page.query("#name").expect("name field");
    let email = page.query("#email").expect("email field");
    let message = page.query("#message").expect("message field");
    page.set_field_value(name, "Ada");
    page.set_field_value(email, "ada@example.com");
    page.set_field_value(message, "I would like to talk about a project.");
    site.handle_event(PageEvent::Submit, &mut page, &mut engine, &mut mailer);

    println!("== delivery succeeds ==");
    site.handle_event(
        PageEvent::SendComplete(Ok(())),
        &mut page,
        &mut engine,
        &mut mailer,
    );
    let status = page.query("#form-status").expect("status region");
    println!("  status: {:?}", page.text(status));
}
