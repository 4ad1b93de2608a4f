use std::io::Cursor;

use crate::ingest::{load_from_reader, CrimeTree};
use crate::kdtree::TraversalOrder;

const CRIME_CSV: &str = "\
X,Y,Time,Street,Offense,Date,Tract,Lat,Long
1380844.0,411399.0,1,5400 BLOCK PENN AV,Robbery,1/1/1990,1014,40.46112,-79.93697
1351861.0,402245.0,5,100 BLOCK ORCHARD PL,Aggravated Assault,1/1/1990,1920,40.43540,-80.04028
1359237.0,412339.0,13,2900 BLOCK BRIGHTON RD,Robbery,1/1/1990,2509,40.46260,-80.01490
1367538.0,418030.0,15,CHARLES ST & BAKER ST,Robbery,1/1/1990,2509,40.47820,-79.98520
1357460.0,404240.0,140,300 BLOCK FIFTH AV,Aggravated Assault,1/1/1990,0201,40.44070,-80.00070
1361000.0,410000.0,1910,900 BLOCK CEDAR AV,Burglary,1/2/1990,2304,40.45600,-80.00300
";

fn load() -> CrimeTree {
    let mut tree = CrimeTree::new();
    let stats = load_from_reader(Cursor::new(CRIME_CSV), &mut tree).unwrap();
    assert_eq!(stats.loaded, 6);
    tree
}

#[test]
fn load_search_and_export() {
    let tree = load();

    let found = tree.range(1355000., 400000., 1362000., 413000.);
    let offenses: Vec<&str> = found.iter().map(|crime| crime.offense()).collect();
    assert_eq!(offenses.len(), 3);
    assert!(offenses.contains(&"Aggravated Assault"));
    assert!(offenses.contains(&"Burglary"));

    let kml = found.to_kml();
    assert_eq!(kml.matches("<Placemark>").count(), 3);
    assert!(kml.contains("<coordinates>-80.01490,40.46260,0</coordinates>"));
    assert!(kml.contains("<description>300 BLOCK FIFTH AV</description>"));
    assert!(kml.ends_with("</Document>\n</kml>"));

    let listing = found.to_string();
    assert_eq!(listing.lines().count(), 3);
}

#[test]
fn nearest_crime_to_a_point() {
    let tree = load();

    let nearest = tree.nearest(1380000., 411000.);
    let crime = nearest.item().unwrap();
    assert_eq!(crime.street(), "5400 BLOCK PENN AV");
    assert!(nearest.to_string().starts_with("Nearest Crime: 1380844.0,411399.0,1,5400 BLOCK PENN AV"));
}

#[test]
fn every_loaded_crime_is_traversed() {
    let tree = load();
    for order in [
        TraversalOrder::Inorder,
        TraversalOrder::Preorder,
        TraversalOrder::Postorder,
        TraversalOrder::LevelOrder,
        TraversalOrder::ReverseLevelOrder,
    ] {
        let mut times = vec![];
        tree.traverse(order, |coord, crime| {
            assert_eq!((coord.x(), coord.y()), (crime.x(), crime.y()));
            times.push(crime.time());
        });
        times.sort_unstable();
        assert_eq!(times, vec![1, 5, 13, 15, 140, 1910], "{order}");
    }
}
