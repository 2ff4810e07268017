
use compare::Compare;
use std::cmp::Ordering::*;
use std::ops::Bound;
use std::mem;
use super::tile::{Coordinate, Terrain, Tile};

pub type Link = Option<Box<Node>>;

#[derive(Debug)]
pub struct Node {
    left: Link,
    right: Link,
    coordinate: Coordinate,
    terrain: Terrain,
}

impl Node {
    pub fn new(coordinate: Coordinate, terrain: Terrain) -> Self {
        Node { left: None, right: None, coordinate: coordinate, terrain: terrain }
    }

    pub fn tile(&self) -> Tile { Tile::new(self.coordinate, self.terrain) }
}

// An unbalanced tree can be as deep as it is long, so tear it down without recursing.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = vec![];
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        Node {
            left: clone_link(&self.left),
            right: clone_link(&self.right),
            coordinate: self.coordinate,
            terrain: self.terrain,
        }
    }
}

// Copies a subtree in post-order with an explicit stack. `done` holds finished subtrees,
// a node's left copy directly below its right one.
fn clone_link(link: &Link) -> Link {
    let mut todo: Vec<(&Node, bool)> = link.iter().map(|node| (&**node, false)).collect();
    let mut done: Vec<Link> = vec![];

    while let Some((node, children_done)) = todo.pop() {
        if children_done {
            let right = if node.right.is_some() { done.pop().flatten() } else { None };
            let left = if node.left.is_some() { done.pop().flatten() } else { None };
            done.push(Some(Box::new(Node {
                left: left,
                right: right,
                coordinate: node.coordinate,
                terrain: node.terrain,
            })));
        } else {
            todo.push((node, true));
            todo.extend(node.right.iter().map(|right| (&**right, false)));
            todo.extend(node.left.iter().map(|left| (&**left, false)));
        }
    }

    done.pop().flatten()
}

/// Sets the terrain at `coordinate`, returning the terrain it replaced, if any.
pub fn insert<C>(link: &mut Link, cmp: &C, coordinate: Coordinate, terrain: Terrain)
    -> Option<Terrain> where C: Compare<Coordinate> {

    let mut link = link;

    while let Some(node) = link {
        match cmp.compare(&coordinate, &node.coordinate) {
            Equal => return Some(mem::replace(&mut node.terrain, terrain)),
            Less => link = &mut node.left,
            Greater => link = &mut node.right,
        }
    }

    *link = Some(Box::new(Node::new(coordinate, terrain)));
    None
}

pub fn get<'a, C>(link: &'a Link, cmp: &C, coordinate: &Coordinate) -> Option<&'a Node>
    where C: Compare<Coordinate> {

    let mut link = link;

    while let Some(ref node) = *link {
        match cmp.compare(coordinate, &node.coordinate) {
            Equal => return Some(&**node),
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }

    None
}

/// Returns the node with the least coordinate lying after `bound`.
pub fn succ<'a, C>(link: &'a Link, cmp: &C, bound: Bound<&Coordinate>) -> Option<&'a Node>
    where C: Compare<Coordinate> {

    let mut link = link;
    let mut closest = None;

    while let Some(ref node) = *link {
        let after = match bound {
            Bound::Unbounded => true,
            Bound::Included(c) => cmp.compares_le(c, &node.coordinate),
            Bound::Excluded(c) => cmp.compares_lt(c, &node.coordinate),
        };

        if after {
            closest = Some(&**node);
            link = &node.left;
        } else {
            link = &node.right;
        }
    }

    closest
}

/// Returns the row of the leftmost node, or `0` if the tree is empty.
pub fn first_row(link: &Link) -> i32 {
    let mut row = 0;
    let mut link = link;

    while let Some(ref node) = *link {
        row = node.coordinate.b();
        link = &node.left;
    }

    row
}

/// Returns the row of the rightmost node, or `0` if the tree is empty.
pub fn last_row(link: &Link) -> i32 {
    let mut row = 0;
    let mut link = link;

    while let Some(ref node) = *link {
        row = node.coordinate.b();
        link = &node.right;
    }

    row
}

/// Returns the tile with the lowest column in row `b`, if the row has any.
pub fn first_in_row(link: &Link, b: i32) -> Option<Tile> {
    let mut leftmost: Option<&Node> = None;
    let mut link = link;

    while let Some(ref node) = *link {
        let row = node.coordinate.b();

        if row < b {
            link = &node.right;
        } else {
            if row == b && leftmost.map_or(true, |l| node.coordinate.a() < l.coordinate.a()) {
                leftmost = Some(&**node);
            }

            link = &node.left;
        }
    }

    leftmost.map(Node::tile)
}

/// Returns the tile with the highest column in row `b`, if the row has any.
pub fn last_in_row(link: &Link, b: i32) -> Option<Tile> {
    let mut rightmost: Option<&Node> = None;
    let mut link = link;

    while let Some(ref node) = *link {
        let row = node.coordinate.b();

        if row > b {
            link = &node.left;
        } else {
            if row == b && rightmost.map_or(true, |r| node.coordinate.a() > r.coordinate.a()) {
                rightmost = Some(&**node);
            }

            link = &node.right;
        }
    }

    rightmost.map(Node::tile)
}

/// Checks that every coordinate in the subtree lies strictly between `lo` and `hi` (either of
/// which may be absent) and that the subtree is a search tree with respect to `cmp`.
///
/// Stops at the first violation.
pub fn in_order<C>(link: &Link, cmp: &C, lo: Option<&Coordinate>, hi: Option<&Coordinate>)
    -> bool where C: Compare<Coordinate> {

    match *link {
        None => true,
        Some(ref node) => {
            lo.map_or(true, |lo| cmp.compares_gt(&node.coordinate, lo)) &&
            hi.map_or(true, |hi| cmp.compares_lt(&node.coordinate, hi)) &&
            in_order(&node.left, cmp, lo, Some(&node.coordinate)) &&
            in_order(&node.right, cmp, Some(&node.coordinate), hi)
        }
    }
}

pub fn count(link: &Link) -> usize {
    let mut stack: Vec<&Node> = link.iter().map(|node| &**node).collect();
    let mut count = 0;

    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.left.iter().map(|left| &**left));
        stack.extend(node.right.iter().map(|right| &**right));
    }

    count
}

/// Builds a link from a node and its children, bypassing the search order.
#[cfg(test)]
pub fn n(coordinate: Coordinate, terrain: Terrain, left: Link, right: Link) -> Link {
    Some(Box::new(Node { left: left, right: right, coordinate: coordinate, terrain: terrain }))
}
