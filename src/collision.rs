/// Collision detection between the car and the obstacle
///
/// Both entities are axis-aligned rectangles, so a single AABB test is all
/// the physics this game needs.
///
/// # Edge convention
///
/// Rectangles are half-open: a rect at `x` with width `w` covers
/// `x..x + w`. Two rectangles that only share an edge therefore do NOT
/// collide; they must share some area.
use sdl2::rect::Rect;

/// Anything that occupies a rectangle on screen and can be hit.
///
/// The returned bounds are used both for collision and for drawing, so
/// what the player sees is exactly what can crash.
pub trait Collidable {
    fn get_bounds(&self) -> Rect;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// For two rectangles to NOT intersect, one of them must lie entirely to
/// the left, right, above or below the other. Everything else is an overlap.
///
/// ```rust
/// let car = Rect::new(375, 500, 50, 80);
/// let obstacle = Rect::new(380, 450, 50, 80);
/// assert!(aabb_intersect(&car, &obstacle));
/// ```
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Convenience wrapper comparing the bounds of two collidables
pub fn collides(a: &impl Collidable, b: &impl Collidable) -> bool {
    aabb_intersect(&a.get_bounds(), &b.get_bounds())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Block(Rect);

    impl Collidable for Block {
        fn get_bounds(&self) -> Rect {
            self.0
        }
    }

    #[test]
    fn test_aabb_intersect_overlapping() {
        let car = Rect::new(375, 500, 50, 80);
        let obstacle = Rect::new(400, 460, 50, 80);

        assert!(aabb_intersect(&car, &obstacle));
        assert!(aabb_intersect(&obstacle, &car)); // Symmetric
    }

    #[test]
    fn test_touching_bottom_edge_does_not_collide() {
        // Obstacle bottom (420 + 80) sits exactly on the car roof (500)
        let car = Rect::new(375, 500, 50, 80);
        let obstacle = Rect::new(375, 420, 50, 80);

        assert!(!aabb_intersect(&car, &obstacle));
        assert!(aabb_intersect(&car, &Rect::new(375, 421, 50, 80)));
    }

    #[test]
    fn test_touching_side_edges_do_not_collide() {
        let car = Rect::new(375, 500, 50, 80);

        assert!(!aabb_intersect(&car, &Rect::new(325, 500, 50, 80)));
        assert!(!aabb_intersect(&car, &Rect::new(425, 500, 50, 80)));
        assert!(aabb_intersect(&car, &Rect::new(326, 500, 50, 80)));
        assert!(aabb_intersect(&car, &Rect::new(424, 500, 50, 80)));
    }

    #[test]
    fn test_aabb_intersect_separated() {
        let car = Rect::new(0, 500, 50, 80);
        let obstacle = Rect::new(700, -80, 50, 80);

        assert!(!aabb_intersect(&car, &obstacle));
    }

    #[test]
    fn test_collides_uses_bounds() {
        let a = Block(Rect::new(0, 0, 50, 80));
        let b = Block(Rect::new(25, 40, 50, 80));
        let c = Block(Rect::new(50, 0, 50, 80));

        assert!(collides(&a, &b));
        assert!(!collides(&a, &c));
    }
}
