//! # 选点模块
//!
//! 从随机数生成器中抽取 `(行, 列, 通道)` 三元组作为嵌入位置，
//! 并保证同一次运行中每个位置至多被使用一次。

use crate::constants::CHANNELS;
use crate::error::StegoError;
use crate::prng::StegoRng;
use std::num::NonZeroU32;

/// 一个嵌入位置，承载 1 bit 数据。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    pub row: u32,
    pub col: u32,
    pub channel: u8,
}

/// `rows × cols × 3` 的访问标记表，每次运行新建。
pub(crate) struct VisitedSet {
    cols: usize,
    cells: Vec<bool>,
}

impl VisitedSet {
    pub fn new(rows: u32, cols: u32) -> Self {
        let len = rows as usize * cols as usize * CHANNELS as usize;
        Self {
            cols: cols as usize,
            cells: vec![false; len],
        }
    }

    fn index(&self, site: Site) -> usize {
        (site.row as usize * self.cols + site.col as usize) * CHANNELS as usize
            + site.channel as usize
    }

    /// 若该位置尚未访问则标记并返回 `true`，否则返回 `false`。
    pub fn mark(&mut self, site: Site) -> bool {
        let idx = self.index(site);
        !std::mem::replace(&mut self.cells[idx], true)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}

/// 基于共享生成器的无重复选点器。
///
/// 选点器以独占借用持有生成器，噪声叠加阶段之后的所有随机数都经由它消耗。
pub struct SiteSelector<'a> {
    rng: &'a mut StegoRng,
    rows: NonZeroU32,
    cols: NonZeroU32,
    channels: NonZeroU32,
    visited: VisitedSet,
    max_attempts: u64,
}

impl<'a> SiteSelector<'a> {
    /// 为 `width × height` 的图像创建选点器。
    ///
    /// 单次选点最多尝试 `width × height × 3 × attempt_factor` 次。
    ///
    /// # Errors
    ///
    /// 图像宽或高为 0 时返回 [`StegoError::BufferTooSmall`]。
    pub fn new(
        rng: &'a mut StegoRng,
        width: u32,
        height: u32,
        attempt_factor: u64,
    ) -> Result<Self, StegoError> {
        let (Some(rows), Some(cols), Some(channels)) = (
            NonZeroU32::new(height),
            NonZeroU32::new(width),
            NonZeroU32::new(CHANNELS),
        ) else {
            return Err(StegoError::BufferTooSmall {
                sites: 0,
                required: 1,
            });
        };

        let visited = VisitedSet::new(height, width);
        let max_attempts = (visited.len() as u64).saturating_mul(attempt_factor.max(1));

        Ok(Self {
            rng,
            rows,
            cols,
            channels,
            visited,
            max_attempts,
        })
    }

    /// 抽取下一个尚未使用的位置。
    ///
    /// 每次尝试依次抽取行、列、通道三个随机数；命中已访问位置则重试。
    ///
    /// # Errors
    ///
    /// 重试次数超出预算时返回 [`StegoError::SiteExhaustion`]。
    pub fn next_unvisited_site(&mut self) -> Result<Site, StegoError> {
        for attempt in 1..=self.max_attempts {
            let site = Site {
                row: self.rng.next_bounded(self.rows),
                col: self.rng.next_bounded(self.cols),
                channel: self.rng.next_bounded(self.channels) as u8,
            };
            if self.visited.mark(site) {
                if attempt > 1 {
                    log::debug!("Site {site:?} found after {attempt} attempts");
                }
                return Ok(site);
            }
        }

        log::debug!("Site search gave up after {} attempts", self.max_attempts);
        Err(StegoError::SiteExhaustion {
            attempts: self.max_attempts,
        })
    }
}
