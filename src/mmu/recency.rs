use crate::common::types::{FrameId, PageNumber};

#[derive(Debug)]
struct Node {
    page: PageNumber,
    dirty: bool,
    prev: Option<FrameId>,
    next: Option<FrameId>,
}

/// Doubly linked recency list whose nodes are the frames themselves.
///
/// The head is the least recently used frame and the tail the most recently
/// used one. Node indices double as frame indices, so a frame keeps its
/// index for as long as it exists.
#[derive(Debug)]
pub(crate) struct RecencyList {
    nodes: Vec<Node>,
    head: Option<FrameId>,
    tail: Option<FrameId>,
}

/// Page removed from the least recently used end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Victim {
    pub frame: FrameId,
    pub page: PageNumber,
    pub dirty: bool,
}

impl RecencyList {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Allocate the next frame for `page` and make it most recently used
    pub(crate) fn push_new(&mut self, page: PageNumber, dirty: bool) -> FrameId {
        let frame = self.nodes.len();
        self.nodes.push(Node {
            page,
            dirty,
            prev: None,
            next: None,
        });
        self.link_back(frame);
        frame
    }

    /// Move a frame to the most recently used end
    pub(crate) fn touch(&mut self, frame: FrameId) {
        if self.tail == Some(frame) {
            return;
        }
        self.unlink(frame);
        self.link_back(frame);
    }

    pub(crate) fn mark_dirty(&mut self, frame: FrameId) {
        self.nodes[frame].dirty = true;
    }

    pub(crate) fn is_dirty(&self, frame: FrameId) -> bool {
        self.nodes[frame].dirty
    }

    /// Detach the least recently used frame. The frame stays allocated and
    /// must be refilled with `reuse`.
    pub(crate) fn pop_least_recent(&mut self) -> Option<Victim> {
        let frame = self.head?;
        self.unlink(frame);
        let node = &self.nodes[frame];
        Some(Victim {
            frame,
            page: node.page,
            dirty: node.dirty,
        })
    }

    /// Load `page` into a detached frame and make it most recently used
    pub(crate) fn reuse(&mut self, frame: FrameId, page: PageNumber, dirty: bool) {
        let node = &mut self.nodes[frame];
        node.page = page;
        node.dirty = dirty;
        self.link_back(frame);
    }

    /// Pages from least to most recently used
    pub(crate) fn pages(&self) -> Vec<PageNumber> {
        let mut pages = Vec::with_capacity(self.nodes.len());
        let mut cursor = self.head;
        while let Some(frame) = cursor {
            pages.push(self.nodes[frame].page);
            cursor = self.nodes[frame].next;
        }
        pages
    }

    fn unlink(&mut self, frame: FrameId) {
        let (prev, next) = {
            let node = &self.nodes[frame];
            (node.prev, node.next)
        };

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        let node = &mut self.nodes[frame];
        node.prev = None;
        node.next = None;
    }

    fn link_back(&mut self, frame: FrameId) {
        self.nodes[frame].prev = self.tail;
        self.nodes[frame].next = None;
        match self.tail {
            Some(t) => self.nodes[t].next = Some(frame),
            None => self.head = Some(frame),
        }
        self.tail = Some(frame);
    }
}
