use crate::{Error, Result, STACK_SIZE};

/// Fixed-depth return address stack used by CALL/RET.
#[derive(Clone, Debug, Default)]
pub struct CallStack {
    entries: [u16; STACK_SIZE],
    depth: usize,
}

impl CallStack {
    pub fn push(&mut self, addr: u16) -> Result<()> {
        if self.depth == STACK_SIZE {
            return Err(Error::StackOverflow);
        }
        self.entries[self.depth] = addr;
        self.depth += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16> {
        if self.depth == 0 {
            return Err(Error::StackUnderflow);
        }
        self.depth -= 1;
        Ok(self.entries[self.depth])
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Live entries, oldest first.
    pub fn as_slice(&self) -> &[u16] {
        &self.entries[..self.depth]
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_is_lifo() {
        let mut stack = CallStack::default();
        stack.push(0x202).unwrap();
        stack.push(0x40A).unwrap();
        assert_eq!(stack.as_slice(), &[0x202, 0x40A]);
        assert_eq!(stack.pop(), Ok(0x40A));
        assert_eq!(stack.pop(), Ok(0x202));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn seventeenth_push_overflows() {
        let mut stack = CallStack::default();
        for n in 0..STACK_SIZE as u16 {
            stack.push(0x200 + n * 2).unwrap();
        }
        assert_eq!(stack.push(0x300), Err(Error::StackOverflow));
        assert_eq!(stack.depth(), STACK_SIZE);
    }

    #[test]
    fn pop_on_empty_underflows() {
        let mut stack = CallStack::default();
        assert_eq!(stack.pop(), Err(Error::StackUnderflow));
        assert_eq!(stack.depth(), 0);
    }
}
