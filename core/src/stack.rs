use crate::constants::STACK_DEPTH;

/// # Call Stack
/// Return addresses for nested subroutine calls.
///
/// A fixed array plus an explicit depth. Pushing onto a full stack or popping an empty one
/// hands the caller `None` rather than touching anything outside of the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stack {
    addresses: [u16; STACK_DEPTH],
    depth: usize,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            addresses: [0; STACK_DEPTH],
            depth: 0,
        }
    }

    /// Returns `None` if the stack is already full.
    #[must_use]
    pub fn push(&mut self, addr: u16) -> Option<()> {
        let slot = self.addresses.get_mut(self.depth)?;
        *slot = addr;
        self.depth += 1;
        Some(())
    }

    pub fn pop(&mut self) -> Option<u16> {
        self.depth = self.depth.checked_sub(1)?;
        Some(self.addresses[self.depth])
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }

    pub fn peek(&self) -> Option<u16> {
        self.depth.checked_sub(1).map(|top| self.addresses[top])
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test_stack {
    use super::*;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = Stack::new();
        stack.push(0x202).unwrap();
        stack.push(0x404).unwrap();
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.peek(), Some(0x404));
        assert_eq!(stack.pop(), Some(0x404));
        assert_eq!(stack.pop(), Some(0x202));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty() {
        let mut stack = Stack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_push_full() {
        let mut stack = Stack::new();
        for addr in 0..STACK_DEPTH as u16 {
            assert!(stack.push(addr).is_some());
        }
        assert!(stack.push(0xFFF).is_none());
        assert_eq!(stack.depth(), STACK_DEPTH);
        assert_eq!(stack.peek(), Some(STACK_DEPTH as u16 - 1));
    }
}
