//! The interactive command loop.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use crime_tree::ingest::CrimeTree;
use crime_tree::kdtree::TraversalOrder;
use crime_tree::kml::write_kml;
use log::{error, info};

const MENU: &str = "What would you like to do?
1: Inorder
2: Preorder
3: LevelOrder
4: Postorder
5: ReverseLevelOrder
6: Search for points within rectangle
7: Search for nearest neighbor
8: Quit";

/// Reads whitespace-separated tokens from `input`, a line at a time.
struct Tokens<R> {
    input: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: vec![],
        }
    }

    /// The next token, or `None` at end of input.
    fn next(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending = line.split_whitespace().rev().map(str::to_string).collect();
        }
        Ok(self.pending.pop())
    }

    /// Parse the next `n` tokens. A token that fails to parse discards the rest of its line.
    fn parse<V: FromStr>(&mut self, n: usize) -> io::Result<Option<Result<Vec<V>, String>>> {
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            let Some(token) = self.next()? else {
                return Ok(None);
            };
            match token.parse() {
                Ok(value) => values.push(value),
                Err(_) => {
                    self.pending.clear();
                    return Ok(Some(Err(token)));
                }
            }
        }
        Ok(Some(Ok(values)))
    }
}

/// The menu-driven session over a loaded tree.
pub struct Menu<'a, R, W> {
    tree: &'a CrimeTree,
    tokens: Tokens<R>,
    output: W,
    kml_path: PathBuf,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(tree: &'a CrimeTree, input: R, output: W, kml_path: impl AsRef<Path>) -> Self {
        Self {
            tree,
            tokens: Tokens::new(input),
            output,
            kml_path: kml_path.as_ref().to_path_buf(),
        }
    }

    /// Prompt and dispatch until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let Some(choice) = self.tokens.next()? else {
                break;
            };
            match choice.as_str() {
                "1" => self.traverse(TraversalOrder::Inorder)?,
                "2" => self.traverse(TraversalOrder::Preorder)?,
                "3" => self.traverse(TraversalOrder::LevelOrder)?,
                "4" => self.traverse(TraversalOrder::Postorder)?,
                "5" => self.traverse(TraversalOrder::ReverseLevelOrder)?,
                "6" => {
                    if !self.range()? {
                        break;
                    }
                }
                "7" => {
                    if !self.nearest()? {
                        break;
                    }
                }
                "8" => {
                    writeln!(
                        self.output,
                        "Thank you for exploring Pittsburgh crimes in the 1990s."
                    )?;
                    return Ok(());
                }
                _ => {
                    self.tokens.pending.clear();
                    writeln!(
                        self.output,
                        "Invalid option. Please enter a number between 1 and 8."
                    )?;
                }
            }
        }
        Ok(())
    }

    fn traverse(&mut self, order: TraversalOrder) -> Result<()> {
        writeln!(self.output, "{} traversal of the tree:", order)?;

        let output = &mut self.output;
        let mut written = Ok(());
        self.tree.traverse(order, |coord, crime| {
            if written.is_ok() {
                written = writeln!(
                    output,
                    "Crime: {} at ({:?}, {:?})",
                    crime,
                    coord.x(),
                    coord.y()
                );
            }
        });
        written?;
        Ok(())
    }

    /// Returns `false` if input ended before the rectangle was read.
    fn range(&mut self) -> Result<bool> {
        writeln!(
            self.output,
            "Enter a rectangle bottom left (X1, Y1) and top right (X2, Y2) as four doubles"
        )?;
        self.output.flush()?;

        let bounds: Vec<f64> = match self.tokens.parse(4)? {
            None => return Ok(false),
            Some(Err(token)) => {
                writeln!(self.output, "Not a number: {}", token)?;
                return Ok(true);
            }
            Some(Ok(bounds)) => bounds,
        };
        let (x1, y1, x2, y2) = (bounds[0], bounds[1], bounds[2], bounds[3]);

        writeln!(
            self.output,
            "Searching for points within ({}, {}) and ({}, {})",
            x1, y1, x2, y2
        )?;
        let crimes = self.tree.range(x1, y1, x2, y2);
        if crimes.is_empty() {
            writeln!(self.output, "No crimes found within the given range")?;
            return Ok(true);
        }

        write!(self.output, "{}", crimes)?;
        writeln!(self.output, "Found {} crimes", crimes.len())?;
        match write_kml_file(&self.kml_path, crimes.iter()) {
            Ok(()) => {
                info!("Wrote {} placemarks to {}", crimes.len(), self.kml_path.display());
                writeln!(
                    self.output,
                    "KML file '{}' written successfully",
                    self.kml_path.display()
                )?;
            }
            Err(err) => {
                error!("Error while writing KML file: {:#}", err);
                writeln!(self.output, "Could not write KML file: {:#}", err)?;
            }
        }
        Ok(true)
    }

    /// Returns `false` if input ended before the point was read.
    fn nearest(&mut self) -> Result<bool> {
        writeln!(self.output, "Enter a point (X, Y) as two doubles")?;
        self.output.flush()?;

        let point: Vec<f64> = match self.tokens.parse(2)? {
            None => return Ok(false),
            Some(Err(token)) => {
                writeln!(self.output, "Not a number: {}", token)?;
                return Ok(true);
            }
            Some(Ok(point)) => point,
        };

        writeln!(
            self.output,
            "Searching for the nearest crime to point ({}, {})",
            point[0], point[1]
        )?;
        let nearest = self.tree.nearest(point[0], point[1]);
        writeln!(self.output, "{}", nearest)?;
        Ok(true)
    }
}

fn write_kml_file<'a>(
    path: &Path,
    crimes: impl IntoIterator<Item = &'a crime_tree::record::CrimeRecord>,
) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_kml(&mut writer, crimes)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crime_tree::ingest::CrimeTree;
    use crime_tree::record::CrimeRecord;

    use super::Menu;

    fn tree() -> CrimeTree {
        let mut tree = CrimeTree::new();
        for record in [
            CrimeRecord::new(
                10.0, 20.0, 1300, "Main St", "Robbery", "2024-09-28", "12345", "40.1234",
                "-79.5678",
            ),
            CrimeRecord::new(
                15.0, 25.0, 1400, "Elm St", "Assault", "2024-09-28", "54321", "41.1234",
                "-80.5678",
            ),
            CrimeRecord::new(
                5.0, 10.0, 1500, "Oak St", "Burglary", "2024-09-28", "67890", "42.1234",
                "-81.5678",
            ),
        ] {
            tree.insert(record.x(), record.y(), record);
        }
        tree
    }

    fn session(tree: &CrimeTree, input: &str, kml_path: &std::path::Path) -> String {
        let mut output = vec![];
        Menu::new(tree, Cursor::new(input), &mut output, kml_path)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn kml_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("crime-tree-{}-{}.kml", name, std::process::id()))
    }

    #[test]
    fn test_preorder_then_quit() {
        let out = session(&tree(), "2\n8\n", &kml_path("preorder"));
        let crimes: Vec<&str> = out.lines().filter(|l| l.starts_with("Crime: ")).collect();
        assert_eq!(crimes.len(), 3);
        assert!(crimes[0].contains("Robbery"));
        assert!(crimes[0].ends_with("at (10.0, 20.0)"));
        assert!(crimes[1].contains("Burglary"));
        assert!(out.contains("Preorder traversal of the tree:"));
        assert!(out.contains("Thank you for exploring Pittsburgh crimes in the 1990s."));
    }

    #[test]
    fn test_each_traversal_choice() {
        let out = session(&tree(), "1\n2\n3\n4\n5\n8\n", &kml_path("orders"));
        let headers: Vec<&str> = out
            .lines()
            .filter(|l| l.ends_with(" traversal of the tree:"))
            .collect();
        assert_eq!(
            headers,
            vec![
                "Inorder traversal of the tree:",
                "Preorder traversal of the tree:",
                "Level order traversal of the tree:",
                "Postorder traversal of the tree:",
                "Reverse level order traversal of the tree:",
            ]
        );
        assert_eq!(out.lines().filter(|l| l.starts_with("Crime: ")).count(), 15);
    }

    #[test]
    fn test_range_writes_kml() {
        let path = kml_path("range");
        let out = session(&tree(), "6\n8 18 20 30\n8\n", &path);
        assert!(out.contains("Searching for points within (8, 18) and (20, 30)"));
        assert!(out.contains("Found 2 crimes"));

        let kml = std::fs::read_to_string(&path).unwrap();
        assert_eq!(kml.matches("<Placemark>").count(), 2);
        assert!(kml.contains("<name>Assault</name>"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_empty_range() {
        let path = kml_path("empty");
        let out = session(&tree(), "6\n100 100 200 200\n8\n", &path);
        assert!(out.contains("No crimes found within the given range"));
        assert!(!path.exists());
    }

    #[test]
    fn test_nearest() {
        let out = session(&tree(), "7\n12 22\n", &kml_path("nearest"));
        assert!(out.contains("Nearest Crime: 10.0,20.0,1300,Main St,Robbery"));
    }

    #[test]
    fn test_bad_input_reprompts() {
        let out = session(&tree(), "9\nfoo\n7\n1 x\n8\n", &kml_path("bad"));
        assert_eq!(
            out.matches("Invalid option. Please enter a number between 1 and 8.")
                .count(),
            2
        );
        assert!(out.contains("Not a number: x"));
        assert!(out.contains("Thank you"));
    }

    #[test]
    fn test_end_of_input_stops() {
        let out = session(&CrimeTree::new(), "1\n", &kml_path("eof"));
        assert!(out.contains("Inorder traversal of the tree:"));
        assert!(!out.contains("Crime: "));
    }
}
