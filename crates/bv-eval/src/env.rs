//! Lexical environment: an arena of single-binding frames.
//!
//! A frame binds exactly one parameter id to one thunk and points at its
//! parent by index. Frames are never mutated or removed once pushed, and a
//! parent id is always strictly older than its child, so the chain is
//! acyclic by construction. Closures and thunks address frames by
//! [`FrameId`], which keeps them `Copy` and free of lifetime entanglement
//! with the arena itself.

use bv_types::Expr;

/// Index of a frame in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameId(usize);

/// A deferred computation: an expression paired with the scope it must be
/// evaluated under. Re-evaluated on every force — call-by-name keeps no
/// memo slot, so a thunk carries no mutable state and copies freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thunk<'a> {
    pub expr: &'a Expr,
    pub scope: Option<FrameId>,
}

/// One binding frame.
#[derive(Debug)]
struct Frame<'a> {
    param: u64,
    thunk: Thunk<'a>,
    parent: Option<FrameId>,
}

/// The frame arena. Owned by one evaluator run; `None` as a scope means the
/// empty root environment.
#[derive(Debug, Default)]
pub struct Environment<'a> {
    frames: Vec<Frame<'a>>,
}

impl<'a> Environment<'a> {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Push a frame binding `param` to `thunk` under `parent`, returning its
    /// id.
    pub fn bind(&mut self, param: u64, thunk: Thunk<'a>, parent: Option<FrameId>) -> FrameId {
        let id = FrameId(self.frames.len());
        self.frames.push(Frame {
            param,
            thunk,
            parent,
        });
        id
    }

    /// Walk the chain innermost→outermost; the first frame binding `id`
    /// wins, which is what gives lexical shadowing.
    pub fn lookup(&self, scope: Option<FrameId>, id: u64) -> Option<Thunk<'a>> {
        let mut current = scope;
        while let Some(FrameId(index)) = current {
            let frame = &self.frames[index];
            if frame.param == id {
                return Some(frame.thunk);
            }
            current = frame.parent;
        }
        None
    }
}
