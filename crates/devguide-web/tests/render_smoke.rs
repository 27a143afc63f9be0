//! Smoke test: render the guide page to HTML and check its content.

#[cfg(feature = "ssr")]
#[test]
fn guide_page_renders_every_command() {
    use devguide_web::content::GUIDE;
    use devguide_web::copy_state::CopyFeedback;
    use devguide_web::pages::GuidePage;
    use leptos::prelude::*;

    let owner = Owner::new();
    owner.set();
    CopyFeedback::provide();

    let html = view! { <GuidePage /> }.to_html();

    // Every command block is present with its literal command and anchor id.
    for step in GUIDE.all_steps() {
        assert!(html.contains(step.command), "missing command for step {}", step.id);
        assert!(html.contains(step.id), "missing anchor id for step {}", step.id);
    }

    // Prerequisites and their check commands.
    for p in GUIDE.prerequisites {
        assert!(html.contains(p.name), "missing prerequisite {}", p.name);
        assert!(html.contains(p.check_command), "missing check command for {}", p.name);
    }

    // Header and footer text.
    assert!(html.contains("Comprehensive Developer Guide"));
    assert!(html.contains("Crafted with Passion"));

    // Copy affordance on every command block, none pre-marked as copied.
    let copy_buttons = html.matches("aria-label=\"Copy command\"").count();
    assert_eq!(copy_buttons, GUIDE.all_steps().count());
    assert!(!html.contains("Copied!"), "no block should start in the copied state");
}
