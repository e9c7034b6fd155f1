//! Integration tests for the DiagramBuilder and Session APIs.

use placard::{
    DiagramBuilder, PlacardError,
    color::Color,
    config::{AppConfig, CanvasConfig, StyleConfig},
    geometry::Point,
    layout::Viewport,
    loader,
    session::Session,
};

const FRAMEWORK: &str = r##"{
    "diagram": "framework",
    "title": "ITIL Framework Structure",
    "description": "Two columns of ITIL processes over a shared CMDB",
    "banner": { "title": "ITIL Framework" },
    "columns": [
        { "title": "Service Support", "label": "Operational processes", "color": "#3498db",
          "processes": [
            { "name": "Service Desk", "color": "#5dade2", "description": "Single point of contact." },
            { "name": "Incident Management", "color": "#5dade2", "description": "Restore service fast." },
            { "name": "Configuration Management", "color": "#f1c40f", "highlight": true,
              "description": "Maintains the CMDB." }
          ] },
        { "title": "Service Delivery", "label": "Tactical processes", "color": "#27ae60",
          "connector": "dashed",
          "processes": [
            { "name": "Capacity Management", "color": "#58d68d", "description": "Right-size capacity." }
          ] }
    ],
    "foundation": { "title": "Configuration Management Database (CMDB)",
                    "label": "Single source of truth", "color": "#e67e22",
                    "description": "Stores configuration items." }
}"##;

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_parse_and_render_framework() {
    let builder = DiagramBuilder::default();
    let diagram = builder.parse(FRAMEWORK).expect("Failed to parse diagram");
    assert_eq!(diagram.elements().len(), 5);

    let viewport = builder.default_viewport(&diagram);
    assert_eq!(viewport, Viewport::new(1200.0, 800.0));

    let svg = builder
        .render_svg(&diagram, viewport, None)
        .expect("Failed to render");
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("ITIL Framework Structure"));
    assert!(!svg.contains("data-layer=\"popover\""));
}

#[test]
fn test_render_with_pointer_shows_popover() {
    let builder = DiagramBuilder::default();
    let diagram = builder.parse(FRAMEWORK).expect("Failed to parse diagram");

    // Second process of the first column: x 60..550, y 320..390
    let svg = builder
        .render_svg(&diagram, Viewport::new(1200.0, 800.0), Some(Point::new(300.0, 350.0)))
        .expect("Failed to render");
    assert!(svg.contains("data-layer=\"popover\""));
    assert!(svg.contains("Restore service fast."));
}

#[test]
fn test_parse_invalid_json_returns_schema_error() {
    let builder = DiagramBuilder::default();
    let result = builder.parse("this is not json");
    assert!(matches!(result, Err(PlacardError::Schema { .. })));
}

#[test]
fn test_parse_reports_every_bad_color() {
    let source = r##"{
        "diagram": "funnel",
        "taskStages": [
            { "name": "One", "color": "not-a-color" },
            { "name": "Two", "color": "#3498db" },
            { "name": "Three", "color": "also-bad" }
        ]
    }"##;
    let builder = DiagramBuilder::default();
    match builder.parse(source) {
        Err(PlacardError::Validation { errors, .. }) => {
            let paths: Vec<&str> = errors.iter().map(|e| e.path()).collect();
            assert_eq!(paths, vec!["taskStages[0].color", "taskStages[2].color"]);
        }
        other => panic!("expected validation errors, got {other:?}"),
    }
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::new(
        CanvasConfig::new(900.0, 640.0, 500.0),
        StyleConfig::new(Color::new("ivory").ok(), "Helvetica"),
    );
    let builder = DiagramBuilder::new(config);
    let diagram = builder
        .parse(r#"{ "diagram": "funnel", "taskStages": [] }"#)
        .expect("Failed to parse");

    let viewport = builder.default_viewport(&diagram);
    assert_eq!(viewport, Viewport::new(900.0, 500.0));

    let svg = builder.render_svg(&diagram, viewport, None).expect("Failed to render");
    assert!(svg.contains("Helvetica"));
}

#[test]
fn test_framework_without_processes_renders() {
    let builder = DiagramBuilder::default();
    for columns in [
        "[]",
        r##"[ { "title": "Service Support", "color": "#3498db" } ]"##,
    ] {
        let source = format!(
            r##"{{ "diagram": "framework", "columns": {columns},
                  "foundation": {{ "title": "CMDB", "color": "#e67e22" }} }}"##
        );
        let diagram = builder.parse(&source).expect("Failed to parse");
        let svg = builder
            .render_svg(&diagram, builder.default_viewport(&diagram), None)
            .expect("Failed to render");
        assert!(svg.contains("<svg"));
        assert!(svg.contains("CMDB"));
    }
}

#[test]
fn test_zero_viewport_is_export_error() {
    let builder = DiagramBuilder::default();
    let diagram = builder.parse(FRAMEWORK).expect("Failed to parse");
    let result = builder.render_svg(&diagram, Viewport::new(0.0, 0.0), None);
    assert!(matches!(result, Err(PlacardError::Export(_))));
}

#[test]
fn test_rendering_is_deterministic() {
    let builder = DiagramBuilder::default();
    let diagram = builder.parse(FRAMEWORK).expect("Failed to parse");
    let viewport = Viewport::new(1024.0, 800.0);
    let pointer = Some(Point::new(400.0, 700.0));
    assert_eq!(
        builder.render_svg(&diagram, viewport, pointer).unwrap(),
        builder.render_svg(&diagram, viewport, pointer).unwrap()
    );
}

#[test]
fn test_session_lifecycle() {
    let mut session = Session::new(Viewport::new(1200.0, 800.0), AppConfig::default());
    assert!(session.frame(None).document().to_string().contains("Loading..."));

    session
        .init(loader::load_str(FRAMEWORK))
        .expect("Failed to init session");
    let frame = session.frame(Some(Point::new(600.0, 700.0)));
    let hovered = frame.snapshot().hover().hovered().expect("foundation hovered");
    let element = session.diagram().unwrap().element(hovered).unwrap();
    assert_eq!(element.name(), "Configuration Management Database (CMDB)");
}
