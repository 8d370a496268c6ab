use pokedex_engine::layout::{DIM_FG, Extent, HIGHLIGHT_FG};
use pokedex_engine::{Canvas, Xterm, build_from_links, draw_evolutions, measure, subtree_height};
use pokedex_types::{EvolutionTree, SpeciesLink, Stage};

/// Plain-text canvas that records glyphs and foreground colors
struct TextCanvas {
    rows: Vec<Vec<char>>,
    colors: Vec<Vec<Option<Xterm>>>,
}

impl TextCanvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![' '; width]; height],
            colors: vec![vec![None; width]; height],
        }
    }

    fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    fn fg_at(&self, x: usize, y: usize) -> Option<Xterm> {
        self.colors[y][x]
    }
}

impl Canvas for TextCanvas {
    fn put_cell(&mut self, x: usize, y: usize, glyph: char, fg: Xterm, _bg: Option<Xterm>) {
        if let Some(cell) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = glyph;
            self.colors[y][x] = Some(fg);
        }
    }
}

fn render(tree: &EvolutionTree, highlight: u32) -> (Vec<String>, TextCanvas) {
    let extent = measure(tree);
    let mut canvas = TextCanvas::new(extent.width, extent.height);
    draw_evolutions(&mut canvas, tree, highlight, (0, 0));
    (canvas.lines(), canvas)
}

fn eevee() -> EvolutionTree {
    build_from_links(vec![
        SpeciesLink::new(133, "Eevee", None),
        SpeciesLink::new(134, "Vaporeon", Some(133)),
        SpeciesLink::new(135, "Jolteon", Some(133)),
        SpeciesLink::new(136, "Flareon", Some(133)),
    ])
    .unwrap()
}

#[test]
fn test_single_stage_is_two_rows() {
    let mew = EvolutionTree::leaf(Stage::new(151, "Mew"));
    assert_eq!(measure(&mew), Extent { width: 3, height: 2 });

    // The id label is wider than the name and runs one cell past it
    let mut canvas = TextCanvas::new(4, 2);
    draw_evolutions(&mut canvas, &mew, 151, (0, 0));
    assert_eq!(canvas.lines(), vec!["#151", "Mew"]);
}

#[test]
fn test_linear_chain_stays_two_rows() {
    let tree = build_from_links(vec![
        SpeciesLink::new(1, "Bulbasaur", None),
        SpeciesLink::new(2, "Ivysaur", Some(1)),
        SpeciesLink::new(3, "Venusaur", Some(2)),
    ])
    .unwrap();

    assert_eq!(subtree_height(&tree), 2);

    let (lines, _) = render(&tree, 2);
    assert_eq!(
        lines,
        vec![
            "  #001       #002       #003",
            "Bulbasaur > Ivysaur > Venusaur",
        ]
    );
}

#[test]
fn test_sibling_column_uses_widest_name() {
    let tree = build_from_links(vec![
        SpeciesLink::new(133, "Eevee", None),
        SpeciesLink::new(134, "Vaporeon", Some(133)),
        SpeciesLink::new(135, "Jolteon", Some(133)),
    ])
    .unwrap();

    let siblings = pokedex_engine::generation_width(&tree.evolutions);
    assert_eq!(siblings, 8);
    assert_eq!(measure(&tree).width, 5 + 3 + 8);
    assert_eq!(measure(&tree).height, 4);
}

#[test]
fn test_branching_family_stacks_siblings() {
    let tree = eevee();
    assert_eq!(subtree_height(&tree), 6);

    let (lines, _) = render(&tree, 133);
    assert_eq!(
        lines,
        vec![
            "#133      #134",
            "Eevee > Vaporeon",
            "          #135",
            "        Jolteon",
            "          #136",
            "        Flareon",
        ]
    );
}

#[test]
fn test_branching_sibling_pushes_later_siblings_down() {
    let tree = build_from_links(vec![
        SpeciesLink::new(1, "Alpha", None),
        SpeciesLink::new(2, "Bravo", Some(1)),
        SpeciesLink::new(3, "Charlie", Some(1)),
        SpeciesLink::new(4, "Delta", Some(2)),
        SpeciesLink::new(5, "Echo", Some(2)),
        SpeciesLink::new(6, "Foxtrot", Some(3)),
    ])
    .unwrap();

    assert_eq!(measure(&tree), Extent { width: 5 + 3 + 7 + 3 + 7, height: 6 });

    let (lines, _) = render(&tree, 1);
    assert_eq!(
        lines,
        vec![
            "#001     #002     #004",
            "Alpha >  Bravo  > Delta",
            "                  #005",
            "                  Echo",
            "         #003      #006",
            "        Charlie > Foxtrot",
        ]
    );
}

#[test]
fn test_highlighted_stage_is_bright() {
    let (_, canvas) = render(&eevee(), 135);

    // "Jolteon" starts at column 8 on row 3
    assert_eq!(canvas.fg_at(8, 3), Some(HIGHLIGHT_FG));
    assert_eq!(canvas.fg_at(0, 1), Some(DIM_FG));
    assert_eq!(canvas.fg_at(8, 1), Some(DIM_FG));
}

#[test]
fn test_origin_offsets_every_cell() {
    let tree = eevee();
    let extent = measure(&tree);
    let mut canvas = TextCanvas::new(extent.width + 2, extent.height + 1);
    draw_evolutions(&mut canvas, &tree, 133, (2, 1));

    let lines = canvas.lines();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "  #133      #134");
    assert_eq!(lines[2], "  Eevee > Vaporeon");
}

#[test]
fn test_drawing_outside_the_canvas_is_clipped() {
    let mut canvas = TextCanvas::new(6, 1);
    draw_evolutions(&mut canvas, &eevee(), 133, (0, 0));
    assert_eq!(canvas.lines(), vec!["#133"]);
}
