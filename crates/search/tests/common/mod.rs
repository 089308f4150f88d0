//! Hand-built game trees for exercising the engines on exact shapes.

use std::rc::Rc;

use othello_core::{Color, GameState};

#[derive(Debug, Clone, Default)]
pub struct Node {
    pub value: i32,
    pub terminal: bool,
    /// Children reachable when the maximizer moves, by slot.
    pub max_moves: Vec<usize>,
    /// Children reachable when the minimizer moves, by slot.
    pub min_moves: Vec<usize>,
}

/// Builder for a tree of [`Node`]s; node 0 is the root.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&mut self, value: i32) -> usize {
        self.nodes.push(Node {
            value,
            ..Node::default()
        });
        self.nodes.len() - 1
    }

    pub fn leaf(&mut self, value: i32) -> usize {
        let id = self.node(value);
        self.nodes[id].terminal = true;
        id
    }

    pub fn edge(&mut self, parent: usize, color: Color, child: usize) -> &mut Self {
        match color {
            Color::Max => self.nodes[parent].max_moves.push(child),
            Color::Min => self.nodes[parent].min_moves.push(child),
        }
        self
    }

    pub fn build(self) -> TreeState {
        TreeState {
            nodes: Rc::new(self.nodes),
            at: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TreeState {
    nodes: Rc<Vec<Node>>,
    pub at: usize,
}

impl TreeState {
    fn moves(&self, color: Color) -> &[usize] {
        let node = &self.nodes[self.at];
        match color {
            Color::Max => &node.max_moves,
            Color::Min => &node.min_moves,
        }
    }
}

impl GameState for TreeState {
    const MOVE_SLOTS: usize = 4;

    fn is_terminal(&self) -> bool {
        self.nodes[self.at].terminal
    }

    fn value(&self) -> i32 {
        self.nodes[self.at].value
    }

    fn is_legal(&self, color: Color, slot: usize) -> bool {
        slot < self.moves(color).len()
    }

    fn play(&self, color: Color, slot: usize) -> Self {
        TreeState {
            nodes: Rc::clone(&self.nodes),
            at: self.moves(color)[slot],
        }
    }

    fn hash_key(&self) -> u64 {
        self.at as u64
    }
}
