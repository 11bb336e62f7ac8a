use stagger::{
    Constraints, EdgeInsets, GridSpec, LayoutConfig, LayoutError, LogLevel, Logger, MemorySink,
    Padded, Placement, Size, StaggeredGrid, TextChip, layout,
};

const TOPICS: &[&str] = &[
    "Arts & Crafts",
    "Beauty",
    "Books",
    "Business",
    "Comics",
    "Culinary",
    "Design",
    "Fashion",
    "Film",
    "History",
    "Maths",
    "Music",
    "People",
    "Philosophy",
    "Religion",
    "Social sciences",
    "Technology",
    "TV",
    "Writing",
];

fn topic_chips() -> Vec<Padded<TextChip>> {
    TOPICS
        .iter()
        .map(|topic| Padded::new(TextChip::new(*topic), EdgeInsets::all(1)))
        .collect()
}

#[test]
fn topic_chips_in_five_rows() {
    let chips = topic_chips();
    let grid = StaggeredGrid::new(5).unwrap();
    let result = grid.measure(&chips, &Constraints::unbounded()).unwrap();

    assert_eq!(result.placements.len(), TOPICS.len());
    for (expected, placement) in result.placements.iter().enumerate() {
        assert_eq!(placement.index, expected);
    }

    // Every padded chip is 5 cells tall, so five rows stack to 25.
    assert_eq!(result.size.height, 25);
    for placement in &result.placements {
        assert_eq!(placement.y, 5 * (placement.index % 5) as u32);
    }

    // Row 0 holds "Arts & Crafts", "Culinary", "Maths", "Religion".
    let widths: Vec<u32> = [0, 5, 10, 15]
        .iter()
        .map(|&i| TextChip::new(TOPICS[i]).natural_size().width + 2)
        .collect();
    assert_eq!(result.placements[5].x, widths[0]);
    assert_eq!(result.placements[10].x, widths[0] + widths[1]);
    assert_eq!(result.placements[15].x, widths[0] + widths[1] + widths[2]);
}

#[test]
fn container_height_is_sum_of_row_maxima() {
    let children = vec![
        Size::new(2, 7),
        Size::new(3, 1),
        Size::new(4, 2),
        Size::new(5, 4),
    ];
    let result = layout(&children, 2, &Constraints::unbounded()).unwrap();
    // row 0 = {7, 2}, row 1 = {1, 4}
    assert_eq!(result.size, Size::new(8, 11));
    assert_eq!(
        result.placements,
        vec![
            Placement::new(0, 0, 0),
            Placement::new(1, 0, 7),
            Placement::new(2, 2, 0),
            Placement::new(3, 3, 7),
        ]
    );
}

#[test]
fn single_row_lays_everything_out_horizontally() {
    let children = vec![Size::new(3, 1), Size::new(4, 2), Size::new(5, 1)];
    let result = layout(&children, 1, &Constraints::unbounded()).unwrap();
    assert_eq!(result.size, Size::new(12, 2));
    let xs: Vec<_> = result.placements.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0, 3, 7]);
    assert!(result.placements.iter().all(|p| p.y == 0));
}

#[test]
fn grid_from_json_spec_with_diagnostics() {
    let spec = GridSpec::from_json(
        r#"{"rows":5,"constraints":{"min_width":0,"max_width":200,"min_height":0,"max_height":200}}"#,
    )
    .unwrap();
    let sink = MemorySink::new();
    let mut config = LayoutConfig::default().with_logger(Logger::new(sink.clone()));
    config.enable_metrics();
    let metrics = config.metrics_handle().unwrap();

    let grid = spec.build_with(config).unwrap();
    let constraints = spec.constraints().unwrap();
    let chips = topic_chips();
    let first = grid.measure(&chips, &constraints).unwrap();
    let second = grid.measure(&chips, &constraints).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.fingerprint(), second.fingerprint());
    assert_eq!(sink.events().len(), 2);
    assert!(sink.events().iter().all(|e| e.level == LogLevel::Debug));

    let snapshot = metrics.lock().unwrap().snapshot();
    assert_eq!(snapshot.passes, 2);
    assert_eq!(snapshot.placements, 2 * TOPICS.len() as u64);
}

#[test]
fn zero_rows_rejected_everywhere() {
    assert!(matches!(
        StaggeredGrid::new(0),
        Err(LayoutError::InvalidArgument(_))
    ));
    assert!(matches!(
        layout(&[Size::new(1, 1)], 0, &Constraints::unbounded()),
        Err(LayoutError::InvalidArgument(_))
    ));
    assert!(GridSpec::from_json(r#"{"rows":0}"#).unwrap().build().is_err());
}

#[test]
fn inverted_bounds_are_rejected_before_any_pass() {
    let parsed = serde_json::from_str::<Constraints>(
        r#"{"min_width":50,"max_width":10,"min_height":0,"max_height":10}"#,
    );
    assert!(parsed.is_err());

    let err = Constraints::new(50, 10, 0, 10).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidArgument(_)));

    let c: Constraints = serde_json::from_str(
        r#"{"min_width":0,"max_width":10,"min_height":0,"max_height":10}"#,
    )
    .unwrap();
    let result = layout(&[Size::new(3, 3)], 2, &c).unwrap();
    assert_eq!(result.size, Size::new(3, 3));
}
