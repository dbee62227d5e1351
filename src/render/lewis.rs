use super::palette::element_color;
use super::surface::{DrawCommand, Surface};
use crate::layout::{AngleSlots, LayoutConfig, LewisLayout, StyleConfig, direction, lay_out_sized};
use crate::model::molecule::Molecule;

const MIN_SEGMENT: f64 = 1e-9;

/// Lays out and draws `molecule` onto `surface`.
///
/// The surface is always cleared to the configured background first, so a
/// later call fully replaces the output of an earlier one. A missing or empty
/// molecule leaves the surface blank and returns `None`.
pub fn render_lewis<S: Surface + ?Sized>(
    molecule: Option<&Molecule>,
    config: &LayoutConfig,
    surface: &mut S,
) -> Option<LewisLayout> {
    surface.clear(config.style.background);

    let molecule = molecule.filter(|m| !m.is_empty())?;
    let layout = lay_out_sized(molecule, config, surface.size());
    draw_layout(molecule, &layout, &config.style, surface);
    Some(layout)
}

/// Draws an already computed layout: bonds, then lone pairs, then labels on top.
pub fn draw_layout<S: Surface + ?Sized>(
    molecule: &Molecule,
    layout: &LewisLayout,
    style: &StyleConfig,
    surface: &mut S,
) {
    draw_bonds(molecule, layout, style, surface);
    draw_lone_pairs(layout, style, surface);
    draw_labels(layout, style, surface);
}

fn draw_bonds<S: Surface + ?Sized>(
    molecule: &Molecule,
    layout: &LewisLayout,
    style: &StyleConfig,
    surface: &mut S,
) {
    for bond in &molecule.bonds {
        let (Some(a), Some(b)) = (layout.point(bond.from), layout.point(bond.to)) else {
            continue;
        };

        let dx = b[0] - a[0];
        let dy = b[1] - a[1];
        let len = dx.hypot(dy);
        if len < MIN_SEGMENT {
            log::debug!(
                "bond {}-{} has coincident endpoints, not drawn",
                bond.from,
                bond.to
            );
            continue;
        }

        let normal = [-dy / len, dx / len];
        let strokes = bond.drawn_order();
        let center = f64::from(strokes - 1) / 2.0;
        for i in 0..strokes {
            let offset = (f64::from(i) - center) * style.bond_spacing;
            let shift = [normal[0] * offset, normal[1] * offset];
            surface.draw(DrawCommand::Line {
                from: [a[0] + shift[0], a[1] + shift[1]],
                to: [b[0] + shift[0], b[1] + shift[1]],
                color: style.bond_color,
                width: style.stroke_width,
            });
        }
    }
}

fn draw_lone_pairs<S: Surface + ?Sized>(layout: &LewisLayout, style: &StyleConfig, surface: &mut S) {
    let tolerance = style.lone_pair_tolerance();

    for (atom, info) in layout.atom_info.iter().enumerate() {
        if !info.shows_lone_pairs() {
            continue;
        }
        let Some(center) = layout.point(atom) else {
            continue;
        };

        let mut slots = AngleSlots::new(info.total_domains);
        for &neighbor in layout.graph.neighbors(atom) {
            let Some(other) = layout.point(neighbor) else {
                continue;
            };
            if (other[0] - center[0]).hypot(other[1] - center[1]) < MIN_SEGMENT {
                continue;
            }
            slots.claim_closest(direction(center, other), Some(tolerance));
        }

        for angle in slots.unused().take(info.lone_pairs) {
            let (sin, cos) = angle.sin_cos();
            let mid = [
                center[0] + cos * style.lone_pair_distance,
                center[1] + sin * style.lone_pair_distance,
            ];
            let half_gap = style.dot_gap / 2.0;
            for side in [-1.0, 1.0] {
                surface.draw(DrawCommand::Disc {
                    center: [mid[0] - sin * half_gap * side, mid[1] + cos * half_gap * side],
                    radius: style.dot_radius,
                    fill: style.dot_color,
                });
            }
        }
    }
}

fn draw_labels<S: Surface + ?Sized>(layout: &LewisLayout, style: &StyleConfig, surface: &mut S) {
    for (position, info) in layout.positions.iter().zip(&layout.atom_info) {
        let center = position.point();
        surface.draw(DrawCommand::Disc {
            center,
            radius: style.label_radius,
            fill: style.background,
        });
        surface.draw(DrawCommand::Text {
            center,
            text: info.element.clone(),
            color: element_color(&info.element),
            font_size: style.font_size,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::Atom;
    use crate::model::molecule::Bond;
    use crate::render::surface::Drawing;

    fn make_water() -> Molecule {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new("O", [0.0, 0.0, 0.0]));
        mol.atoms.push(Atom::new("H", [0.96, 0.0, 0.0]));
        mol.atoms.push(Atom::new("H", [-0.24, 0.93, 0.0]));
        mol.bonds.push(Bond::single(0, 1));
        mol.bonds.push(Bond::single(0, 2));
        mol
    }

    fn make_co2() -> Molecule {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new("O", [-1.16, 0.0, 0.0]));
        mol.atoms.push(Atom::new("C", [0.0, 0.0, 0.0]));
        mol.atoms.push(Atom::new("O", [1.16, 0.0, 0.0]));
        mol.bonds.push(Bond::new(0, 1, 2));
        mol.bonds.push(Bond::new(1, 2, 2));
        mol
    }

    fn make_diatomic(order: u8) -> Molecule {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new("N", [0.0, 0.0, 0.0]));
        mol.atoms.push(Atom::new("N", [1.1, 0.0, 0.0]));
        mol.bonds.push(Bond::new(0, 1, order));
        mol.atoms_2d = Some(vec![[0.0, 0.0], [1.0, 0.0]]);
        mol
    }

    fn dot_centers(drawing: &Drawing, style: &StyleConfig) -> Vec<[f64; 2]> {
        drawing
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Disc { center, radius, .. } if *radius == style.dot_radius => {
                    Some(*center)
                }
                _ => None,
            })
            .collect()
    }

    fn render(mol: &Molecule) -> (Drawing, LayoutConfig, LewisLayout) {
        let config = LayoutConfig::default();
        let mut drawing = Drawing::new(config.canvas.width, config.canvas.height);
        let layout = render_lewis(Some(mol), &config, &mut drawing).unwrap();
        (drawing, config, layout)
    }

    #[test]
    fn water_draws_two_lone_pairs_on_oxygen() {
        let (drawing, config, layout) = render(&make_water());
        assert_eq!(drawing.lines().count(), 2);

        let dots = dot_centers(&drawing, &config.style);
        assert_eq!(dots.len(), 4);

        let oxygen = layout.point(0).unwrap();
        for dot in &dots {
            let d = (dot[0] - oxygen[0]).hypot(dot[1] - oxygen[1]);
            let half_gap = config.style.dot_gap / 2.0;
            let expected = config.style.lone_pair_distance.hypot(half_gap);
            assert!((d - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn small_surface_keeps_orientation_and_stays_inside() {
        let config = LayoutConfig::default();
        let mut drawing = Drawing::new(60.0, 60.0);
        assert!(60.0 < 2.0 * config.canvas.padding);

        let layout = render_lewis(Some(&make_water()), &config, &mut drawing).unwrap();
        assert!(layout.scale.unwrap() > 0.0);

        let oxygen = layout.point(0).unwrap();
        let up = layout.point(1).unwrap();
        assert!(up[1] < oxygen[1]);
        for p in &layout.positions {
            assert!((0.0..=60.0).contains(&p.x) && (0.0..=60.0).contains(&p.y));
        }
    }

    #[test]
    fn lone_pairs_avoid_bond_directions() {
        let (drawing, config, layout) = render(&make_water());
        let oxygen = layout.point(0).unwrap();
        let bond_dirs: Vec<f64> = [1, 2]
            .iter()
            .map(|&h| direction(oxygen, layout.point(h).unwrap()))
            .collect();

        let dots = dot_centers(&drawing, &config.style);
        for pair in dots.chunks(2) {
            let mid = [(pair[0][0] + pair[1][0]) / 2.0, (pair[0][1] + pair[1][1]) / 2.0];
            let angle = direction(oxygen, mid);
            for &dir in &bond_dirs {
                assert!(crate::layout::angular_distance(angle, dir) > 0.5);
            }
        }
    }

    #[test]
    fn carbon_dioxide_has_no_dots_on_carbon() {
        let (drawing, config, layout) = render(&make_co2());
        assert_eq!(drawing.lines().count(), 4);

        let dots = dot_centers(&drawing, &config.style);
        assert_eq!(dots.len(), 8);

        let carbon = layout.point(1).unwrap();
        for dot in &dots {
            let d = (dot[0] - carbon[0]).hypot(dot[1] - carbon[1]);
            assert!(d > config.style.lone_pair_distance + config.style.dot_gap);
        }
    }

    #[test]
    fn lone_fluorine_draws_three_pairs() {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new("F", [0.0, 0.0, 0.0]));
        let (drawing, config, _) = render(&mol);
        assert_eq!(drawing.lines().count(), 0);
        assert_eq!(dot_centers(&drawing, &config.style).len(), 6);
        assert_eq!(drawing.texts().count(), 1);
    }

    #[test]
    fn lone_carbon_draws_only_its_label() {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new("C", [0.0, 0.0, 0.0]));
        let (drawing, _, _) = render(&mol);
        assert_eq!(drawing.commands.len(), 2);
    }

    #[test]
    fn stroke_count_follows_clamped_bond_order() {
        for (order, strokes) in [(0, 1), (1, 1), (2, 2), (3, 3), (5, 3)] {
            let (drawing, _, _) = render(&make_diatomic(order));
            assert_eq!(drawing.lines().count(), strokes, "order {order}");
        }
    }

    #[test]
    fn double_bond_strokes_are_symmetric_about_the_axis() {
        let (drawing, config, layout) = render(&make_diatomic(2));
        let axis_y = layout.point(0).unwrap()[1];
        let ys: Vec<f64> = drawing
            .lines()
            .map(|c| match c {
                DrawCommand::Line { from, to, .. } => {
                    assert!((from[1] - to[1]).abs() < 1e-9);
                    from[1]
                }
                _ => unreachable!(),
            })
            .collect();
        let half = config.style.bond_spacing / 2.0;
        assert!((ys[0] - (axis_y - half)).abs() < 1e-9 || (ys[0] - (axis_y + half)).abs() < 1e-9);
        assert!((ys[0] + ys[1] - 2.0 * axis_y).abs() < 1e-9);
    }

    #[test]
    fn labels_are_drawn_last() {
        let (drawing, _, _) = render(&make_water());
        let first_label = drawing
            .commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Text { .. }))
            .unwrap();
        let tail = &drawing.commands[first_label - 1..];
        assert_eq!(tail.len(), 6);
        assert!(tail.iter().all(|c| !matches!(c, DrawCommand::Line { .. })));
    }

    #[test]
    fn missing_or_empty_molecule_only_clears() {
        let config = LayoutConfig::default();
        let mut drawing = Drawing::new(200.0, 100.0);
        render_lewis(Some(&make_water()), &config, &mut drawing);
        assert!(!drawing.is_empty());

        assert!(render_lewis(None, &config, &mut drawing).is_none());
        assert!(drawing.is_empty());
        assert_eq!(drawing.background, Some(config.style.background));

        assert!(render_lewis(Some(&Molecule::new()), &config, &mut drawing).is_none());
        assert!(drawing.is_empty());
    }

    #[test]
    fn rendering_uses_surface_size() {
        let config = LayoutConfig::default();
        let mut drawing = Drawing::new(900.0, 700.0);
        let layout = render_lewis(Some(&make_water()), &config, &mut drawing).unwrap();
        assert_eq!(layout.size, [900.0, 700.0]);
    }
}
