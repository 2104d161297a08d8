use std::collections::VecDeque;

use tracing::debug;

use crate::{
    map::Map,
    position::{Direction, Position},
};

const UNLABELLED: usize = usize::MAX;

/// How a region's fence is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pricing {
    /// Area times perimeter.
    Perimeter,
    /// Area times number of straight sides.
    Sides,
}

/// Which sides of one region cell face outside the region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pos: Position,
    exposed: [bool; 4],
}

impl EdgeRecord {
    pub fn pos(&self) -> &Position {
        &self.pos
    }

    pub fn is_exposed(&self, dir: Direction) -> bool {
        self.exposed[dir.index()]
    }

    pub fn exposed_n(&self) -> usize {
        self.exposed.iter().filter(|e| **e).count()
    }
}

#[derive(Debug, Clone)]
pub struct Region<T> {
    id: usize,
    symbol: T,
    edges: Vec<EdgeRecord>,
}

impl<T> Region<T> {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn symbol(&self) -> &T {
        &self.symbol
    }

    pub fn area(&self) -> usize {
        self.edges.len()
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> + '_ {
        self.edges.iter().map(|e| e.pos())
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    pub fn perimeter(&self) -> usize {
        self.edges.iter().map(|e| e.exposed_n()).sum()
    }

    /// Count maximal straight runs of exposed edges.
    ///
    /// Edges facing one direction are sorted by the line they lie on, then by
    /// the position along that line; a gap or a line change starts a new side.
    pub fn sides_n(&self) -> usize {
        Direction::all_dirs()
            .iter()
            .map(|dir| {
                let mut line_marks = self
                    .edges
                    .iter()
                    .filter(|e| e.is_exposed(*dir))
                    .map(|e| match dir {
                        Direction::Up | Direction::Down => (e.pos.r(), e.pos.c()),
                        Direction::Left | Direction::Right => (e.pos.c(), e.pos.r()),
                    })
                    .collect::<Vec<_>>();
                line_marks.sort_unstable();

                let mut side_n = 0;
                let mut last_mark: Option<(usize, usize)> = None;
                for (line, along) in line_marks {
                    if !last_mark.is_some_and(|(l, a)| l == line && a + 1 == along) {
                        side_n += 1;
                    }
                    last_mark = Some((line, along));
                }

                side_n
            })
            .sum()
    }

    pub fn price(&self, pricing: Pricing) -> usize {
        match pricing {
            Pricing::Perimeter => self.area() * self.perimeter(),
            Pricing::Sides => self.area() * self.sides_n(),
        }
    }
}

impl<T: Eq + Clone> Map<T> {
    /// Partition the map into maximal same-symbol regions.
    ///
    /// Region ids follow discovery order, `regions[i].id() == i`.
    pub fn regions(&self) -> Vec<Region<T>> {
        let (labels, members) = self.label_regions();
        let regions = members
            .into_iter()
            .enumerate()
            .map(|(id, (symbol, positions))| Region {
                id,
                symbol,
                edges: positions
                    .into_iter()
                    .map(|pos| edge_record(&labels, id, pos))
                    .collect(),
            })
            .collect::<Vec<_>>();
        debug!(region_n = regions.len(), "discovered regions");

        regions
    }

    pub fn fence_price(&self, pricing: Pricing) -> usize {
        self.regions().iter().map(|r| r.price(pricing)).sum()
    }

    // Flood fill every unlabelled cell, returning the label map and each
    // region's symbol and members.
    fn label_regions(&self) -> (Map<usize>, Vec<(T, Vec<Position>)>) {
        let mut labels = self.map_tiles(|_| UNLABELLED);
        let mut members = Vec::new();
        for start_pos in self.positions() {
            if labels.tile(&start_pos) != Some(&UNLABELLED) {
                continue;
            }
            let Some(symbol) = self.tile(&start_pos) else {
                continue;
            };

            let id = members.len();
            let mut region_positions = Vec::new();
            if let Some(label) = labels.tile_mut(&start_pos) {
                *label = id;
            }
            let mut next_positions = VecDeque::from([start_pos]);
            while let Some(cur_pos) = next_positions.pop_front() {
                for dir in Direction::all_dirs().iter().copied() {
                    let Some(neighbor) = self.neighbor(&cur_pos, dir) else {
                        continue;
                    };
                    if self.tile(&neighbor) != Some(symbol) {
                        continue;
                    }
                    if let Some(label) = labels.tile_mut(&neighbor) {
                        if *label == UNLABELLED {
                            *label = id;
                            next_positions.push_back(neighbor);
                        }
                    }
                }
                region_positions.push(cur_pos);
            }

            members.push((symbol.clone(), region_positions));
        }

        (labels, members)
    }
}

fn edge_record(labels: &Map<usize>, id: usize, pos: Position) -> EdgeRecord {
    let mut exposed = [false; 4];
    for dir in Direction::all_dirs().iter().copied() {
        exposed[dir.index()] = labels
            .neighbor(&pos, dir)
            .and_then(|neighbor| labels.tile(&neighbor).copied())
            .map_or(true, |label| label != id);
    }

    EdgeRecord { pos, exposed }
}
