#![allow(unused)]

use std::{
    collections::VecDeque,
    ops::Deref,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use bip32::{ChildNumber, XPrv};
use k256::ecdsa::SigningKey;
use ledger_transport::{APDUAnswer, APDUCommand, APDUErrorCode};
use log::{debug, trace};

use ledger_eth_core::{
    apdu::{
        coin::Coin,
        status::{apdu_error_code, Status},
        Instruction, ETH_APDU_CLA,
    },
    config::Config,
    engine::{
        Confirm, ConfirmParams, Digest, Driver, DriverError, Engine, Event, Keccak, MsgHasher,
        RS_LEN,
    },
    helpers::{eth_address, Address},
};

/// Keystore and hasher call counters
#[derive(Debug, Default)]
pub struct Counters {
    pub derive: AtomicUsize,
    pub sign: AtomicUsize,
    pub hash: AtomicUsize,
}

impl Counters {
    pub fn derive(&self) -> usize {
        self.derive.load(Ordering::SeqCst)
    }

    pub fn sign(&self) -> usize {
        self.sign.load(Ordering::SeqCst)
    }

    pub fn hash(&self) -> usize {
        self.hash.load(Ordering::SeqCst)
    }
}

/// Injected keystore faults
#[derive(Clone, Debug, Default)]
pub struct Faults {
    pub derive: bool,
    pub sign: bool,
    pub recovery_id: Option<i32>,
}

/// Driver implementation for test use
pub struct TestDriver {
    /// BIP39 Mnemonic derived seed
    pub seed: [u8; 64],
    pub faults: Faults,
    pub counters: Arc<Counters>,
}

impl TestDriver {
    pub fn new(seed: [u8; 64]) -> Self {
        Self {
            seed,
            faults: Faults::default(),
            counters: Arc::new(Counters::default()),
        }
    }

    pub fn with_faults(mut self, faults: Faults) -> Self {
        self.faults = faults;
        self
    }

    fn key(&self, path: &[u32]) -> Result<SigningKey, DriverError> {
        let mut k = XPrv::new(self.seed).map_err(|_| DriverError)?;
        for p in path {
            k = k.derive_child(ChildNumber(*p)).map_err(|_| DriverError)?;
        }
        Ok(k.private_key().clone())
    }
}

impl Driver for TestDriver {
    fn derive_address(&self, _coin: Coin, path: &[u32]) -> Result<Address, DriverError> {
        self.counters.derive.fetch_add(1, Ordering::SeqCst);

        if self.faults.derive {
            return Err(DriverError);
        }

        let k = self.key(path)?;
        let p = k.verifying_key().to_encoded_point(false);
        let p: [u8; 65] = p.as_bytes().try_into().map_err(|_| DriverError)?;

        eth_address(&p).ok_or(DriverError)
    }

    fn sign(&self, path: &[u32], digest: &Digest) -> Result<([u8; RS_LEN], i32), DriverError> {
        self.counters.sign.fetch_add(1, Ordering::SeqCst);

        if self.faults.sign {
            return Err(DriverError);
        }

        let k = self.key(path)?;
        let (sig, recid) = k
            .sign_prehash_recoverable(digest)
            .map_err(|_| DriverError)?;

        let mut rs = [0u8; RS_LEN];
        rs.copy_from_slice(&sig.to_bytes());

        let recid = self.faults.recovery_id.unwrap_or(recid.to_byte() as i32);

        Ok((rs, recid))
    }
}

/// Keccak hasher counting invocations
pub struct CountingHasher {
    pub counters: Arc<Counters>,
}

impl MsgHasher for CountingHasher {
    fn digest(&self, data: &[u8]) -> Digest {
        self.counters.hash.fetch_add(1, Ordering::SeqCst);
        Keccak.digest(data)
    }
}

/// Recorded confirmation prompt
#[derive(Clone, PartialEq, Debug)]
pub struct Prompt {
    pub title: String,
    pub body: String,
    pub scrollable: bool,
}

/// Scripted confirmation, approving by default once answers are exhausted
#[derive(Debug, Default)]
pub struct TestConfirm {
    pub answers: VecDeque<bool>,
    pub prompts: Vec<Prompt>,
}

impl Confirm for TestConfirm {
    fn confirm(&mut self, params: &ConfirmParams<'_>) -> bool {
        let approve = self.answers.pop_front().unwrap_or(true);

        debug!(
            "confirm '{}': '{}' ({})",
            params.title.escape_debug(),
            params.body.escape_debug(),
            match approve {
                true => "approve",
                false => "reject",
            }
        );

        self.prompts.push(Prompt {
            title: params.title.to_string(),
            body: params.body.to_string(),
            scrollable: params.scrollable,
        });

        approve
    }
}

pub type TestEngineInner = Engine<TestDriver, CountingHasher>;

#[derive(Clone)]
pub struct TestEngine {
    pub engine: Arc<Mutex<TestEngineInner>>,
    pub ui: Arc<Mutex<TestConfirm>>,
    pub counters: Arc<Counters>,
}

impl TestEngine {
    pub fn new(drv: TestDriver, config: Config) -> Self {
        let counters = drv.counters.clone();
        let hasher = CountingHasher {
            counters: counters.clone(),
        };

        Self {
            engine: Arc::new(Mutex::new(Engine::new_with_hasher(drv, config, hasher))),
            ui: Arc::new(Mutex::new(TestConfirm::default())),
            counters,
        }
    }

    /// Queue answers for upcoming confirmation prompts
    pub fn answer(&self, answers: &[bool]) {
        let mut ui = self.ui.lock().unwrap();
        ui.answers.extend(answers);
    }

    /// Fetch and clear recorded prompts
    pub fn take_prompts(&self) -> Vec<Prompt> {
        let mut ui = self.ui.lock().unwrap();
        core::mem::take(&mut ui.prompts)
    }
}

#[async_trait]
impl ledger_transport::Exchange for TestEngine {
    type Error = ledger_eth_tests::Error;
    type AnswerType = Vec<u8>;

    async fn exchange<I>(
        &self,
        command: &APDUCommand<I>,
    ) -> Result<APDUAnswer<Self::AnswerType>, Self::Error>
    where
        I: Deref<Target = [u8]> + Send + Sync,
    {
        debug!("cmd: {:02x} ({} bytes)", command.ins, command.data.len());
        trace!("data: {:02x?}", &command.data[..]);

        let mut buff = vec![0u8; 256];

        let code = if command.cla != ETH_APDU_CLA {
            buff.clear();
            APDUErrorCode::ClaNotSupported as u16
        } else if Instruction::try_from(command.ins).is_err() {
            buff.clear();
            APDUErrorCode::InsNotSupported as u16
        } else {
            match Event::parse(command.ins, &command.data) {
                // Decode failures are reported without reaching the engine
                Err(e) => {
                    debug!("decode failed: {:?}", e);
                    buff.clear();
                    apdu_error_code(&e) as u16
                }
                Ok(evt) => {
                    let mut engine = self.engine.lock().unwrap();
                    let mut ui = self.ui.lock().unwrap();

                    match engine.update(&evt, &mut *ui) {
                        Ok(o) => {
                            let n = o.encode(&mut buff).map_err(ledger_eth_tests::Error::Apdu)?;
                            buff.truncate(n);
                            Status::Ok.into()
                        }
                        Err(e) => {
                            debug!("engine error: {}", e);
                            buff.clear();
                            Status::from(e).into()
                        }
                    }
                }
            }
        };

        buff.extend_from_slice(&code.to_be_bytes());

        trace!("resp: {:02x?}", buff);

        let a = APDUAnswer::from_answer(buff).map_err(|_| ledger_eth_tests::Error::UnknownStatus(code))?;

        Ok(a)
    }
}

/// Setup a test engine for the provided mnemonic
pub fn setup(mnemonic: &str, config: Config) -> TestEngine {
    let _ = simplelog::SimpleLogger::init(log::LevelFilter::Debug, Default::default());

    let drv = TestDriver::new(ledger_eth_tests::seed(mnemonic));
    TestEngine::new(drv, config)
}
