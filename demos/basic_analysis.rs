//! 演示如何在 library 模式下使用 seqlab 做序列分析。
//!
//! 运行方式：
//! ```bash
//! cargo run --example basic_analysis
//! ```

use seqlab::graph::overlap::{build_overlap_graph, OverlapParams};
use seqlab::index::sa;
use seqlab::search::{find_approx, search_bad_char, search_good_suffix, DistanceMode};
use seqlab::util::{codon, dna};

fn main() {
    // 1. 准备序列
    let text = b"GCATCGCAGAGAGTATACAGTACG";
    println!("序列: {}", std::str::from_utf8(text).unwrap());
    println!("长度: {} bp, GC 含量: {:.4}", text.len(), dna::gc_content(text));

    // 2. 精确匹配：两种 Boyer-Moore 位移策略
    let pattern = b"GCAGAGAG";
    let bc = search_bad_char(text, pattern).unwrap();
    let gs = search_good_suffix(text, pattern).unwrap();
    println!("\n精确匹配 '{}':", std::str::from_utf8(pattern).unwrap());
    println!("  坏字符规则: {:?}", bc.positions);
    println!("  好后缀规则: {:?}", gs.positions);

    // 3. 近似匹配：Hamming 与编辑距离两种模式
    let approx = find_approx(text, b"GCAGAGTG", 1, DistanceMode::Hamming).unwrap();
    println!("\n近似匹配 'GCAGAGTG' (k=1, Hamming): {:?}", approx.positions);
    let approx = find_approx(text, b"GCAGAGG", 1, DistanceMode::Edit).unwrap();
    println!("近似匹配 'GCAGAGG' (k=1, 编辑距离): {:?}", approx.positions);

    // 4. 后缀数组：构建、逆数组、定位
    let sa_arr = sa::build_sa(text);
    let isa = sa::inverse_sa(&sa_arr).unwrap();
    println!("\n后缀数组前 8 项: {:?}", &sa_arr[..8]);
    println!("isa[sa[0]] = {} (往返校验)", isa[sa_arr[0] as usize]);
    let located = sa::locate(text, &sa_arr, pattern).unwrap();
    println!("后缀数组定位 '{}': {:?}", std::str::from_utf8(pattern).unwrap(), located);

    // 5. 序列变换与翻译
    let rc = dna::revcomp(text);
    println!("\n反向互补: {}", String::from_utf8_lossy(&rc));
    let protein = codon::translate(b"ATGAAATAG", 0).unwrap();
    println!("翻译 ATGAAATAG (frame 0): {}", protein);

    // 6. 重叠图
    let reads: &[&[u8]] = &[b"ATCGA", b"CGATT", b"TTGGG"];
    let graph = build_overlap_graph(
        reads,
        OverlapParams {
            min_overlap: 3,
            self_overlap: false,
        },
    )
    .unwrap();
    println!("\n重叠图 (min_overlap=3): {} 节点, {} 边", graph.node_count(), graph.edge_count());
    for (node, neighbors) in &graph.adjacency {
        println!("  {} -> {:?}", node, neighbors);
    }

    println!("\n完成！");
}
