use anchor_lang::prelude::*;

use crate::{
    constants::QUEUE_CAPACITY,
    errors::LotteryError,
    state::{TicketQueue, TicketReceipt},
};

impl TicketQueue {
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() >= QUEUE_CAPACITY
    }

    pub fn push_back(&mut self, receipt: TicketReceipt) -> Result<()> {
        require!(!self.is_full(), LotteryError::QueueFull);

        // tail never runs past the slots written so far
        let tail = (self.head as usize + self.len()) % QUEUE_CAPACITY;
        if tail == self.slots.len() {
            self.slots.push(receipt);
        } else {
            self.slots[tail] = receipt;
        }

        self.len = self.len.checked_add(1).ok_or(LotteryError::MathOverflow)?;
        Ok(())
    }

    pub fn pop_front(&mut self) -> Result<TicketReceipt> {
        require!(!self.is_empty(), LotteryError::QueueEmpty);

        let receipt = self.slots[self.head as usize].clone();
        self.len -= 1;
        self.head = if self.len == 0 {
            0
        } else {
            ((self.head as usize + 1) % QUEUE_CAPACITY) as u16
        };

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PickSet;

    fn empty_queue() -> TicketQueue {
        TicketQueue {
            lottery: Pubkey::new_unique(),
            bump: 254,
            head: 0,
            len: 0,
            slots: Vec::new(),
        }
    }

    fn receipt(ticket_id: u64) -> TicketReceipt {
        TicketReceipt {
            ticket_id,
            picks: PickSet::from_drawn(vec![0, 1], (ticket_id % 6) as u8),
        }
    }

    #[test]
    fn pops_in_arrival_order() {
        let mut q = empty_queue();
        for id in 1..=5 {
            q.push_back(receipt(id)).unwrap();
        }
        assert_eq!(q.len(), 5);

        let popped: Vec<u64> = (0..5).map(|_| q.pop_front().unwrap().ticket_id).collect();
        assert_eq!(popped, vec![1, 2, 3, 4, 5]);
        assert!(q.is_empty());
        assert_eq!(q.head, 0);
    }

    #[test]
    fn reuses_slots_after_draining() {
        let mut q = empty_queue();
        for id in 1..=3 {
            q.push_back(receipt(id)).unwrap();
        }
        for _ in 0..3 {
            q.pop_front().unwrap();
        }
        for id in 10..=11 {
            q.push_back(receipt(id)).unwrap();
        }

        assert_eq!(q.slots.len(), 3);
        assert_eq!(q.pop_front().unwrap().ticket_id, 10);
        assert_eq!(q.pop_front().unwrap().ticket_id, 11);
    }

    #[test]
    fn wraps_around_at_capacity() {
        let mut q = empty_queue();
        for id in 0..QUEUE_CAPACITY as u64 {
            q.push_back(receipt(id)).unwrap();
        }
        assert!(q.is_full());
        assert_eq!(
            q.push_back(receipt(999)).unwrap_err(),
            LotteryError::QueueFull.into()
        );

        for expected in 0..10u64 {
            assert_eq!(q.pop_front().unwrap().ticket_id, expected);
        }
        for id in 1000..1010u64 {
            q.push_back(receipt(id)).unwrap();
        }
        assert!(q.is_full());
        assert_eq!(q.slots.len(), QUEUE_CAPACITY);

        let mut order = Vec::with_capacity(QUEUE_CAPACITY);
        while !q.is_empty() {
            order.push(q.pop_front().unwrap().ticket_id);
        }
        let expected: Vec<u64> = (10..QUEUE_CAPACITY as u64).chain(1000..1010).collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn pop_on_empty_fails() {
        let mut q = empty_queue();
        assert_eq!(q.pop_front().unwrap_err(), LotteryError::QueueEmpty.into());
    }
}
