#[cfg(feature = "threaded")]
pub use self::threadpool::Workers;

#[cfg(feature = "threaded")]
mod threadpool {
    use crate::block::Matrix;

    pub struct Workers(u32, Option<scoped_threadpool::Pool>);

    impl Workers {
        #[inline(always)]
        pub fn new(lanes: u32) -> Workers {
            match lanes {
                1 => Workers(lanes, None),
                n => Workers(lanes, Some(scoped_threadpool::Pool::new(n))),
            }
        }

        /// Runs `fill_slice` once per lane and joins every lane before
        /// returning. The join is the inter-slice barrier.
        #[inline(always)]
        pub fn map<F>(&mut self, blocks: &mut Matrix, fill_slice: &F)
            where F: Fn(&mut Matrix, u32) + Sync
        {
            match self {
                Workers(1, _) => fill_slice(blocks, 0),
                Workers(lanes, Some(pool)) => {
                    let lanes = *lanes;
                    pool.scoped(|sc| {
                        for lane in 0..lanes {
                            // Lanes write disjoint rows and only read
                            // blocks settled before this slice.
                            let m = unsafe { blocks.mut_ref() };
                            sc.execute(move || fill_slice(m, lane));
                        }
                    })
                }
                _ => unreachable!(),
            }
        }
    }
}

#[cfg(not(feature = "threaded"))]
pub use self::sequential::Workers;

#[cfg(not(feature = "threaded"))]
mod sequential {
    use crate::block::Matrix;

    /// Holds the number of lanes.
    pub struct Workers(u32);

    impl Workers {
        #[inline(always)]
        pub fn new(lanes: u32) -> Workers {
            Workers(lanes)
        }

        #[inline(always)]
        pub fn map<F>(&mut self, blocks: &mut Matrix, fill_slice: &F)
            where F: Fn(&mut Matrix, u32) + Sync
        {
            for lane in 0..self.0 {
                fill_slice(blocks, lane);
            }
        }
    }
}
