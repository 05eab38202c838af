//! Point-by-point shape drawing.

mod operations;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use globekit_common::{Cartesian3, Cartographic, MeasureError};

    fn at(lon: f64, lat: f64, height: f64) -> Cartesian3 {
        Cartesian3::from_degrees(lon, lat, height)
    }

    #[test]
    fn line_completes_after_two_points() {
        let mut drawer = Drawer::new(ShapeKind::Line, DrawStyle::default());
        assert!(drawer.drop_point(at(0.0, 0.0, 0.0)).unwrap());
        assert!(!drawer.is_complete());
        assert!(drawer.drop_point(at(1.0, 0.0, 0.0)).unwrap());
        assert!(drawer.is_complete());
        assert!(!drawer.drop_point(at(2.0, 0.0, 0.0)).unwrap());
        assert_eq!(drawer.points().len(), 2);
    }

    #[test]
    fn moving_before_first_point_is_ignored() {
        let mut drawer = Drawer::new(ShapeKind::Polyline, DrawStyle::default());
        assert!(!drawer.moving(at(0.0, 0.0, 0.0)).unwrap());
        assert!(drawer.positions().is_empty());
    }

    #[test]
    fn moving_previews_next_point() {
        let mut drawer = Drawer::new(ShapeKind::Polyline, DrawStyle::default());
        drawer.drop_point(at(0.0, 0.0, 0.0)).unwrap();
        drawer.moving(at(1.0, 1.0, 0.0)).unwrap();
        assert_eq!(drawer.positions().len(), 2);
        assert_eq!(drawer.points().len(), 1);

        drawer.moving(at(2.0, 2.0, 0.0)).unwrap();
        assert_eq!(drawer.positions()[1], at(2.0, 2.0, 0.0));
    }

    #[test]
    fn cancel_drops_last_point() {
        let mut drawer = Drawer::new(ShapeKind::Polygon, DrawStyle::default());
        drawer.drop_point(at(0.0, 0.0, 0.0)).unwrap();
        drawer.drop_point(at(1.0, 0.0, 0.0)).unwrap();
        assert!(drawer.cancel());
        assert_eq!(drawer.points().len(), 1);
        assert!(drawer.cancel());
        assert!(!drawer.cancel());
        assert!(!drawer.is_drawing());
    }

    #[test]
    fn cancel_reopens_completed_line() {
        let mut drawer = Drawer::new(ShapeKind::Line, DrawStyle::default());
        drawer.drop_point(at(0.0, 0.0, 0.0)).unwrap();
        drawer.drop_point(at(1.0, 0.0, 0.0)).unwrap();
        assert!(drawer.cancel());
        assert!(!drawer.is_complete());
        assert!(drawer.drop_point(at(3.0, 0.0, 0.0)).unwrap());
    }

    #[test]
    fn play_off_requires_minimum_points() {
        let mut drawer = Drawer::new(ShapeKind::Polygon, DrawStyle::default());
        drawer.drop_point(at(0.0, 0.0, 0.0)).unwrap();
        drawer.drop_point(at(1.0, 0.0, 0.0)).unwrap();
        let err = drawer.play_off().unwrap_err();
        assert_eq!(err, MeasureError::NotEnoughPoints { needed: 3, have: 2 });

        drawer.drop_point(at(1.0, 1.0, 0.0)).unwrap();
        let shape = drawer.play_off().unwrap();
        assert_eq!(shape.kind, ShapeKind::Polygon);
        assert_eq!(shape.positions.len(), 3);
        assert!(!drawer.is_drawing());
    }

    #[test]
    fn shape_leaves_drawer_untouched() {
        let mut drawer = Drawer::new(ShapeKind::Polygon, DrawStyle::default());
        drawer.drop_point(at(0.0, 0.0, 0.0)).unwrap();
        assert!(drawer.shape().is_err());
        drawer.drop_point(at(1.0, 0.0, 0.0)).unwrap();
        drawer.drop_point(at(1.0, 1.0, 0.0)).unwrap();

        let shape = drawer.shape().unwrap();
        assert_eq!(shape.positions.len(), 3);
        assert_eq!(drawer.positions().len(), 3);
        assert!(drawer.is_drawing());
    }

    #[test]
    fn play_off_drops_cursor_preview() {
        let mut drawer = Drawer::new(ShapeKind::Polyline, DrawStyle::default());
        drawer.drop_point(at(0.0, 0.0, 0.0)).unwrap();
        drawer.drop_point(at(1.0, 0.0, 0.0)).unwrap();
        drawer.moving(at(5.0, 5.0, 0.0)).unwrap();
        let shape = drawer.play_off().unwrap();
        assert_eq!(shape.positions, vec![at(0.0, 0.0, 0.0), at(1.0, 0.0, 0.0)]);
    }

    #[test]
    fn triangle_preview_closes_through_horizontal_point() {
        let mut drawer = Drawer::new(ShapeKind::Triangle, DrawStyle::default());
        let start = at(10.0, 10.0, 0.0);
        let end = at(10.01, 10.01, 300.0);
        drawer.drop_point(start).unwrap();
        drawer.moving(end).unwrap();

        let preview = drawer.positions();
        assert_eq!(preview.len(), 4);
        assert_eq!(preview[0], start);
        assert_eq!(preview[2], end);
        assert_eq!(preview[3], start);

        let corner = Cartographic::from_cartesian(preview[1]).unwrap();
        assert!((corner.longitude.to_degrees() - 10.0).abs() < 1e-9);
        assert!((corner.latitude.to_degrees() - 10.0).abs() < 1e-9);
        assert!((corner.height - 300.0).abs() < 1e-6);
    }

    #[test]
    fn triangle_completes_with_two_points() {
        let mut drawer = Drawer::new(ShapeKind::Triangle, DrawStyle::default());
        drawer.drop_point(at(0.0, 0.0, 0.0)).unwrap();
        drawer.drop_point(at(0.01, 0.0, 100.0)).unwrap();
        assert!(drawer.is_complete());
        assert!(!drawer.cancel());

        let shape = drawer.play_off().unwrap();
        assert_eq!(shape.positions.len(), 4);
        assert_eq!(shape.positions[0], shape.positions[3]);
    }

    #[test]
    fn invalid_triangle_point_leaves_state() {
        let mut drawer = Drawer::new(ShapeKind::Triangle, DrawStyle::default());
        drawer.drop_point(at(0.0, 0.0, 0.0)).unwrap();
        assert!(drawer.moving(Cartesian3::ZERO).is_err());
        assert_eq!(drawer.positions().len(), 1);
    }

    #[test]
    fn style_from_config() {
        let config = globekit_config::schema::MeasureConfig {
            line_color: "#00ff00".into(),
            line_width: 4,
            ..Default::default()
        };
        let style = DrawStyle::from_config(&config);
        assert_eq!(style.color, globekit_common::Color::from_rgba(0, 255, 0, 255));
        assert_eq!(style.width, 4);
    }
}
