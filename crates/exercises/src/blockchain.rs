//! A toy ledger ordered by transaction timestamps.
//!
//! Nothing here is cryptographically meaningful: hashes and signatures are a
//! 32-bit string hash, and validators take turns instead of staking.

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info};
use serde::Serialize;

/// Hash of the genesis block's parent.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Wrapping 32-bit string hash over UTF-16 code units, rendered as a signed
/// decimal.
pub fn hash_code(text: &str) -> String {
    text.encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(i32::from(unit))
        })
        .to_string()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Source of the current time in milliseconds since the Unix epoch.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}

impl<F: Fn() -> u64> Clock for F {
    fn now_millis(&self) -> u64 {
        self()
    }
}

/// Picks which validator mines the next block.
pub trait ValidatorSelection {
    /// Index into a validator list of length `count`, which is never zero.
    /// Indices past the end wrap around.
    fn select(&mut self, count: usize) -> usize;
}

/// Validators take turns in list order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin {
    next: usize,
}

impl ValidatorSelection for RoundRobin {
    fn select(&mut self, count: usize) -> usize {
        let index = self.next % count;
        self.next = index + 1;
        index
    }
}

impl<F: FnMut(usize) -> usize> ValidatorSelection for F {
    fn select(&mut self, count: usize) -> usize {
        self(count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub id: String,
    pub sender: String,
    pub receiver: String,
    pub amount: u64,
    pub timestamp: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl Transaction {
    /// The id is `sender-receiver-timestamp`, so two transfers between the
    /// same parties in the same millisecond collide.
    pub fn new(sender: &str, receiver: &str, amount: u64, timestamp: u64) -> Self {
        Self {
            id: format!("{}-{}-{}", sender, receiver, timestamp),
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            amount,
            timestamp,
            signature: None,
        }
    }

    /// Sign over the key and the transaction as it currently serializes.
    ///
    /// Signing twice hashes the previous signature in as well.
    pub fn sign(&mut self, private_key: &str) {
        let payload = format!("{}-{}", private_key, to_json(self));
        self.signature = Some(hash_code(&payload));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub previous_hash: String,
    pub timestamp: u64,
    pub transactions: Vec<Transaction>,
    pub hash: String,
}

impl Block {
    /// An empty block; `hash` stays empty until [`Block::seal`].
    pub fn new(previous_hash: impl Into<String>, timestamp: u64) -> Self {
        Self {
            previous_hash: previous_hash.into(),
            timestamp,
            transactions: Vec::new(),
            hash: String::new(),
        }
    }

    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn compute_hash(&self) -> String {
        hash_code(&format!(
            "{}-{}-{}",
            self.previous_hash,
            self.timestamp,
            to_json(&self.transactions)
        ))
    }

    /// Store the hash of the current contents.
    pub fn seal(&mut self) {
        self.hash = self.compute_hash();
    }
}

pub struct Blockchain<C = SystemClock, V = RoundRobin> {
    chain: Vec<Block>,
    pending: Vec<Transaction>,
    validators: Vec<String>,
    clock: C,
    selection: V,
}

impl Blockchain {
    pub fn new() -> Self {
        Self::with_parts(SystemClock, RoundRobin::default())
    }
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, V: ValidatorSelection> Blockchain<C, V> {
    /// A chain holding only the genesis block, stamped by `clock`.
    pub fn with_parts(clock: C, selection: V) -> Self {
        let mut genesis = Block::new(GENESIS_PREVIOUS_HASH, clock.now_millis());
        genesis.seal();
        Self {
            chain: vec![genesis],
            pending: Vec::new(),
            validators: vec![
                "Validator1".to_string(),
                "Validator2".to_string(),
                "Validator3".to_string(),
            ],
            clock,
            selection,
        }
    }

    /// Replace the validator set. An empty list keeps the current one.
    pub fn with_validators<I, S>(mut self, validators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let validators: Vec<String> = validators.into_iter().map(Into::into).collect();
        if !validators.is_empty() {
            self.validators = validators;
        }
        self
    }

    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }

    pub fn validators(&self) -> &[String] {
        &self.validators
    }

    pub fn latest_block(&self) -> &Block {
        // The genesis block is never removed
        &self.chain[self.chain.len() - 1]
    }

    /// Queue a transaction for the next block.
    pub fn create_transaction(&mut self, transaction: Transaction) {
        debug!("Queued transaction {}", transaction.id);
        self.pending.push(transaction);
    }

    /// Whether a block on the chain already holds a transaction with this id.
    pub fn is_transaction_duplicated(&self, transaction: &Transaction) -> bool {
        self.chain
            .iter()
            .flat_map(|block| &block.transactions)
            .any(|mined| mined.id == transaction.id)
    }

    /// The transactions that may be mined now, in their original order.
    ///
    /// Drops timestamps later than the clock, ids already on the chain, and
    /// repeats of an id earlier in `transactions`.
    pub fn validate_transactions(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let now = self.clock.now_millis();
        let mut accepted = HashSet::new();
        transactions
            .iter()
            .filter(|tx| {
                tx.timestamp <= now
                    && !self.is_transaction_duplicated(tx)
                    && accepted.insert(tx.id.as_str())
            })
            .cloned()
            .collect()
    }

    /// Name of the validator for the next block.
    pub fn select_validator(&mut self) -> &str {
        let count = self.validators.len();
        let index = self.selection.select(count) % count;
        &self.validators[index]
    }

    /// Seal the valid pending transactions into a new block.
    ///
    /// Returns `None` and leaves the pending list untouched when nothing is
    /// valid. Otherwise the pending list is cleared, including the
    /// transactions that were rejected.
    pub fn mine_block(&mut self) -> Option<&Block> {
        let validator = self.select_validator().to_string();
        info!("Selected validator: {}", validator);

        let valid = self.validate_transactions(&self.pending);
        if valid.is_empty() {
            info!("No valid transactions to mine");
            return None;
        }

        let mut block = Block::new(self.latest_block().hash.clone(), self.clock.now_millis());
        for transaction in valid {
            block.add_transaction(transaction);
        }
        block.seal();
        info!(
            "Mined block {} with {} transactions",
            block.hash,
            block.transactions.len()
        );

        self.chain.push(block);
        self.pending.clear();
        self.chain.last()
    }

    /// Every block's hash matches its contents and links to its parent.
    pub fn is_chain_valid(&self) -> bool {
        let linked = self
            .chain
            .windows(2)
            .all(|pair| pair[1].previous_hash == pair[0].hash);
        linked && self.chain.iter().all(|block| block.hash == block.compute_hash())
    }
}
