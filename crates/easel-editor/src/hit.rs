//! Hit testing: screen point → handle, item or empty canvas.
//!
//! Resize handles of selected items win over item bodies so a handle that
//! overlaps a neighbouring item still grabs. Bodies are tested topmost-first.

use easel_core::{Handle, ItemId, Point, Scene, Selection, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Handle { id: ItemId, handle: Handle },
    Item(ItemId),
    Canvas,
}

/// Find what lies under `screen`. `tolerance` is the handle grab radius in
/// screen pixels, so handles stay the same size at every zoom.
pub fn hit_test(
    scene: &Scene,
    selection: &Selection,
    viewport: &Viewport,
    screen: Point,
    tolerance: f64,
) -> HitTarget {
    // Topmost selected item's handles first.
    for item in scene.items().iter().rev() {
        if !selection.contains(item.id) {
            continue;
        }
        let bounds = item.bounds();
        for handle in Handle::ALL {
            let corner = viewport.scene_to_screen(handle.corner(bounds));
            if (corner.x - screen.x).abs() <= tolerance && (corner.y - screen.y).abs() <= tolerance {
                return HitTarget::Handle {
                    id: item.id,
                    handle,
                };
            }
        }
    }

    match scene.item_at(viewport.screen_to_scene(screen)) {
        Some(id) => HitTarget::Item(id),
        None => HitTarget::Canvas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::{CanvasItem, Color, ItemKind, ShapeItem, ShapeKind, Size, Stroke, Vec2};

    fn scene_with_two() -> (Scene, ItemId, ItemId) {
        let mut scene = Scene::new();
        let make = |x: f64| {
            CanvasItem::new(
                ItemKind::Shape(ShapeItem {
                    shape: ShapeKind::Rectangle,
                    fill: Color::WHITE,
                    stroke: Stroke::NONE,
                    corner_radius: 0.0,
                    text: None,
                }),
                Point::new(x, 0.0),
                Size::new(100.0, 100.0),
            )
        };
        let a = scene.add(make(0.0));
        let b = scene.add(make(50.0));
        (scene, a, b)
    }

    #[test]
    fn topmost_body_wins() {
        let (scene, _a, b) = scene_with_two();
        let hit = hit_test(&scene, &Selection::new(), &Viewport::default(), Point::new(75.0, 50.0), 6.0);
        assert_eq!(hit, HitTarget::Item(b));
    }

    #[test]
    fn handle_of_selected_item_beats_body_above_it() {
        let (scene, a, _b) = scene_with_two();
        let mut sel = Selection::new();
        sel.select_only(a);
        // a's se corner (100,100) lies inside b.
        let hit = hit_test(&scene, &sel, &Viewport::default(), Point::new(98.0, 97.0), 6.0);
        assert_eq!(
            hit,
            HitTarget::Handle {
                id: a,
                handle: Handle::Se
            }
        );
    }

    #[test]
    fn handles_ignored_when_not_selected() {
        let (scene, a, _b) = scene_with_two();
        let hit = hit_test(&scene, &Selection::new(), &Viewport::default(), Point::new(0.0, 0.0), 6.0);
        assert_eq!(hit, HitTarget::Item(a));
    }

    #[test]
    fn respects_viewport_transform() {
        let (scene, _a, _b) = scene_with_two();
        let mut vp = Viewport::default();
        vp.pan_by(Vec2::new(500.0, 0.0));
        assert_eq!(
            hit_test(&scene, &Selection::new(), &vp, Point::new(75.0, 50.0), 6.0),
            HitTarget::Canvas
        );
    }
}
