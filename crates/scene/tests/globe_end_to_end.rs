use foundation::math::{LatLon, lat_lon_to_sphere};
use pretty_assertions::assert_eq;
use runtime::{Frame, scroll_progress};
use scene::{GlobeConfig, GlobeNetwork, GlobeScene, Location, NetworkPreset, Rgb};

const RADIUS: f64 = 2.0;

fn two_city_network(bulge_radius: f64) -> GlobeNetwork {
    let a = LatLon::new(0.0, 0.0);
    let b = LatLon::new(0.0, 90.0);
    GlobeNetwork::build(
        vec![
            Location::new("A", a, Rgb::from_hex(0xfbbf24), RADIUS),
            Location::new("B", b, Rgb::from_hex(0x3b82f6), RADIUS),
        ],
        &[(0, 1)],
        bulge_radius,
    )
    .expect("two-city network")
}

#[test]
fn sampled_route_bulges_and_lands_on_projected_endpoints() {
    // A quarter-turn arc needs a control point well above the sphere before
    // the Bezier itself clears the surface.
    let net = two_city_network(3.0);
    let route = &net.routes()[0];
    let points = route.curve.sample(50);

    assert_eq!(points.len(), 50);
    assert_eq!(points[0], lat_lon_to_sphere(LatLon::new(0.0, 0.0), RADIUS));
    assert_eq!(points[49], lat_lon_to_sphere(LatLon::new(0.0, 90.0), RADIUS));

    let max = points.iter().map(|p| p.length()).fold(0.0, f64::max);
    assert!(max > RADIUS, "max distance {max} does not clear the sphere");
    assert!(route.curve.control.length() > RADIUS);
}

#[test]
fn scroll_drives_lighting_through_shared_progress() {
    let (writer, reader) = scroll_progress();
    let mut scene = GlobeScene::new(GlobeConfig {
        network: NetworkPreset::Compact,
        ..GlobeConfig::default()
    })
    .expect("scene");

    let mut frame = Frame::new(0, 1.0 / 60.0);
    let mut daytime = Vec::new();
    for step in 0..=8 {
        writer.commit(step as f64 / 8.0 + 0.01);
        let state = scene.tick(reader.get(), frame);
        daytime.push(state.lighting.is_daytime);
        frame = frame.next();
    }

    assert_eq!(
        daytime,
        vec![true, true, false, false, true, true, false, false, false]
    );
}

#[test]
fn scene_description_round_trips_through_json() {
    let scene = GlobeScene::with_network(GlobeConfig::default(), two_city_network(2.3));
    let json = scene.world().describe().to_json().expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
    let nodes = value["nodes"].as_array().expect("nodes array");
    // globe + 2 markers with rings + 1 route (line, particle, glow) + 4 lights + stars
    assert_eq!(nodes.len(), 1 + 4 + 3 + 4 + 1);
    assert_eq!(nodes[0]["role"]["kind"], "globe");
}
