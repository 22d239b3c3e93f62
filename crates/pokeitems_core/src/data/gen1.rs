//! Generation 1 (Red/Blue/Yellow) item indices.
//!
//! Indices 98-195 have no item behind them and keep their `unusedN` names.

use super::ItemDef;

#[rustfmt::skip]
pub(crate) const GEN1_ITEMS: &[ItemDef] = &[
    ItemDef { index:   0, name: "noItem"         },
    ItemDef { index:   1, name: "masterBall"     },
    ItemDef { index:   2, name: "ultraBall"      },
    ItemDef { index:   3, name: "greatBall"      },
    ItemDef { index:   4, name: "pokeBall"       },
    ItemDef { index:   5, name: "townMap"        },
    ItemDef { index:   6, name: "bicycle"        },
    ItemDef { index:   7, name: "questionMark7"  },  // surfboard slot, shown as ?????
    ItemDef { index:   8, name: "safariBall"     },
    ItemDef { index:   9, name: "pokedex"        },
    ItemDef { index:  10, name: "moonStone"      },
    ItemDef { index:  11, name: "antidote"       },
    ItemDef { index:  12, name: "burnHeal"       },
    ItemDef { index:  13, name: "iceHeal"        },
    ItemDef { index:  14, name: "awakening"      },
    ItemDef { index:  15, name: "parlyzHeal"     },
    ItemDef { index:  16, name: "fullRestore"    },
    ItemDef { index:  17, name: "maxPotion"      },
    ItemDef { index:  18, name: "hyperPotion"    },
    ItemDef { index:  19, name: "superPotion"    },
    ItemDef { index:  20, name: "potion"         },
    ItemDef { index:  21, name: "boulderBadge"   },
    ItemDef { index:  22, name: "cascadeBadge"   },
    ItemDef { index:  23, name: "thunderBadge"   },
    ItemDef { index:  24, name: "rainbowBadge"   },
    ItemDef { index:  25, name: "soulBadge"      },
    ItemDef { index:  26, name: "marshBadge"     },
    ItemDef { index:  27, name: "volcanoBadge"   },
    ItemDef { index:  28, name: "earthBadge"     },
    ItemDef { index:  29, name: "escapeRope"     },
    ItemDef { index:  30, name: "repel"          },
    ItemDef { index:  31, name: "oldAmber"       },
    ItemDef { index:  32, name: "fireStone"      },
    ItemDef { index:  33, name: "thunderstone"   },
    ItemDef { index:  34, name: "waterStone"     },
    ItemDef { index:  35, name: "hpUp"           },
    ItemDef { index:  36, name: "protein"        },
    ItemDef { index:  37, name: "iron"           },
    ItemDef { index:  38, name: "carbos"         },
    ItemDef { index:  39, name: "calcium"        },
    ItemDef { index:  40, name: "rareCandy"      },
    ItemDef { index:  41, name: "domeFossil"     },
    ItemDef { index:  42, name: "helixFossil"    },
    ItemDef { index:  43, name: "secretKey"      },
    ItemDef { index:  44, name: "questionMark44" },  // shown as ?????
    ItemDef { index:  45, name: "bikeVoucher"    },
    ItemDef { index:  46, name: "xAccuracy"      },
    ItemDef { index:  47, name: "leafStone"      },
    ItemDef { index:  48, name: "cardKey"        },
    ItemDef { index:  49, name: "nugget"         },
    ItemDef { index:  50, name: "ppUpGlitch"     },  // unobtainable PP Up copy
    ItemDef { index:  51, name: "pokeDoll"       },
    ItemDef { index:  52, name: "fullHeal"       },
    ItemDef { index:  53, name: "revive"         },
    ItemDef { index:  54, name: "maxRevive"      },
    ItemDef { index:  55, name: "guardSpec"      },
    ItemDef { index:  56, name: "superRepel"     },
    ItemDef { index:  57, name: "maxRepel"       },
    ItemDef { index:  58, name: "direHit"        },
    ItemDef { index:  59, name: "coin"           },
    ItemDef { index:  60, name: "freshWater"     },
    ItemDef { index:  61, name: "sodaPop"        },
    ItemDef { index:  62, name: "lemonade"       },
    ItemDef { index:  63, name: "ssTicket"       },
    ItemDef { index:  64, name: "goldTeeth"      },
    ItemDef { index:  65, name: "xAttack"        },
    ItemDef { index:  66, name: "xDefend"        },
    ItemDef { index:  67, name: "xSpeed"         },
    ItemDef { index:  68, name: "xSpecial"       },
    ItemDef { index:  69, name: "coinCase"       },
    ItemDef { index:  70, name: "oaksParcel"     },
    ItemDef { index:  71, name: "itemfinder"     },
    ItemDef { index:  72, name: "silphScope"     },
    ItemDef { index:  73, name: "pokeFlute"      },
    ItemDef { index:  74, name: "liftKey"        },
    ItemDef { index:  75, name: "expAll"         },
    ItemDef { index:  76, name: "oldRod"         },
    ItemDef { index:  77, name: "goodRod"        },
    ItemDef { index:  78, name: "superRod"       },
    ItemDef { index:  79, name: "ppUp"           },
    ItemDef { index:  80, name: "ether"          },
    ItemDef { index:  81, name: "maxEther"       },
    ItemDef { index:  82, name: "elixer"         },
    ItemDef { index:  83, name: "maxElixer"      },
    ItemDef { index:  84, name: "floorB2F"       },  // elevator floors 84-97 are menu entries, not items
    ItemDef { index:  85, name: "floorB1F"       },
    ItemDef { index:  86, name: "floor1F"        },
    ItemDef { index:  87, name: "floor2F"        },
    ItemDef { index:  88, name: "floor3F"        },
    ItemDef { index:  89, name: "floor4F"        },
    ItemDef { index:  90, name: "floor5F"        },
    ItemDef { index:  91, name: "floor6F"        },
    ItemDef { index:  92, name: "floor7F"        },
    ItemDef { index:  93, name: "floor8F"        },
    ItemDef { index:  94, name: "floor9F"        },
    ItemDef { index:  95, name: "floor10F"       },
    ItemDef { index:  96, name: "floor11F"       },
    ItemDef { index:  97, name: "floorB4F"       },
    ItemDef { index:  98, name: "unused98"       },
    ItemDef { index:  99, name: "unused99"       },
    ItemDef { index: 100, name: "unused100"      },
    ItemDef { index: 101, name: "unused101"      },
    ItemDef { index: 102, name: "unused102"      },
    ItemDef { index: 103, name: "unused103"      },
    ItemDef { index: 104, name: "unused104"      },
    ItemDef { index: 105, name: "unused105"      },
    ItemDef { index: 106, name: "unused106"      },
    ItemDef { index: 107, name: "unused107"      },
    ItemDef { index: 108, name: "unused108"      },
    ItemDef { index: 109, name: "unused109"      },
    ItemDef { index: 110, name: "unused110"      },
    ItemDef { index: 111, name: "unused111"      },
    ItemDef { index: 112, name: "unused112"      },
    ItemDef { index: 113, name: "unused113"      },
    ItemDef { index: 114, name: "unused114"      },
    ItemDef { index: 115, name: "unused115"      },
    ItemDef { index: 116, name: "unused116"      },
    ItemDef { index: 117, name: "unused117"      },
    ItemDef { index: 118, name: "unused118"      },
    ItemDef { index: 119, name: "unused119"      },
    ItemDef { index: 120, name: "unused120"      },
    ItemDef { index: 121, name: "unused121"      },
    ItemDef { index: 122, name: "unused122"      },
    ItemDef { index: 123, name: "unused123"      },
    ItemDef { index: 124, name: "unused124"      },
    ItemDef { index: 125, name: "unused125"      },
    ItemDef { index: 126, name: "unused126"      },
    ItemDef { index: 127, name: "unused127"      },
    ItemDef { index: 128, name: "unused128"      },
    ItemDef { index: 129, name: "unused129"      },
    ItemDef { index: 130, name: "unused130"      },
    ItemDef { index: 131, name: "unused131"      },
    ItemDef { index: 132, name: "unused132"      },
    ItemDef { index: 133, name: "unused133"      },
    ItemDef { index: 134, name: "unused134"      },
    ItemDef { index: 135, name: "unused135"      },
    ItemDef { index: 136, name: "unused136"      },
    ItemDef { index: 137, name: "unused137"      },
    ItemDef { index: 138, name: "unused138"      },
    ItemDef { index: 139, name: "unused139"      },
    ItemDef { index: 140, name: "unused140"      },
    ItemDef { index: 141, name: "unused141"      },
    ItemDef { index: 142, name: "unused142"      },
    ItemDef { index: 143, name: "unused143"      },
    ItemDef { index: 144, name: "unused144"      },
    ItemDef { index: 145, name: "unused145"      },
    ItemDef { index: 146, name: "unused146"      },
    ItemDef { index: 147, name: "unused147"      },
    ItemDef { index: 148, name: "unused148"      },
    ItemDef { index: 149, name: "unused149"      },
    ItemDef { index: 150, name: "unused150"      },
    ItemDef { index: 151, name: "unused151"      },
    ItemDef { index: 152, name: "unused152"      },
    ItemDef { index: 153, name: "unused153"      },
    ItemDef { index: 154, name: "unused154"      },
    ItemDef { index: 155, name: "unused155"      },
    ItemDef { index: 156, name: "unused156"      },
    ItemDef { index: 157, name: "unused157"      },
    ItemDef { index: 158, name: "unused158"      },
    ItemDef { index: 159, name: "unused159"      },
    ItemDef { index: 160, name: "unused160"      },
    ItemDef { index: 161, name: "unused161"      },
    ItemDef { index: 162, name: "unused162"      },
    ItemDef { index: 163, name: "unused163"      },
    ItemDef { index: 164, name: "unused164"      },
    ItemDef { index: 165, name: "unused165"      },
    ItemDef { index: 166, name: "unused166"      },
    ItemDef { index: 167, name: "unused167"      },
    ItemDef { index: 168, name: "unused168"      },
    ItemDef { index: 169, name: "unused169"      },
    ItemDef { index: 170, name: "unused170"      },
    ItemDef { index: 171, name: "unused171"      },
    ItemDef { index: 172, name: "unused172"      },
    ItemDef { index: 173, name: "unused173"      },
    ItemDef { index: 174, name: "unused174"      },
    ItemDef { index: 175, name: "unused175"      },
    ItemDef { index: 176, name: "unused176"      },
    ItemDef { index: 177, name: "unused177"      },
    ItemDef { index: 178, name: "unused178"      },
    ItemDef { index: 179, name: "unused179"      },
    ItemDef { index: 180, name: "unused180"      },
    ItemDef { index: 181, name: "unused181"      },
    ItemDef { index: 182, name: "unused182"      },
    ItemDef { index: 183, name: "unused183"      },
    ItemDef { index: 184, name: "unused184"      },
    ItemDef { index: 185, name: "unused185"      },
    ItemDef { index: 186, name: "unused186"      },
    ItemDef { index: 187, name: "unused187"      },
    ItemDef { index: 188, name: "unused188"      },
    ItemDef { index: 189, name: "unused189"      },
    ItemDef { index: 190, name: "unused190"      },
    ItemDef { index: 191, name: "unused191"      },
    ItemDef { index: 192, name: "unused192"      },
    ItemDef { index: 193, name: "unused193"      },
    ItemDef { index: 194, name: "unused194"      },
    ItemDef { index: 195, name: "unused195"      },
    ItemDef { index: 196, name: "hm01"           },
    ItemDef { index: 197, name: "hm02"           },
    ItemDef { index: 198, name: "hm03"           },
    ItemDef { index: 199, name: "hm04"           },
    ItemDef { index: 200, name: "hm05"           },
    ItemDef { index: 201, name: "tm01"           },
    ItemDef { index: 202, name: "tm02"           },
    ItemDef { index: 203, name: "tm03"           },
    ItemDef { index: 204, name: "tm04"           },
    ItemDef { index: 205, name: "tm05"           },
    ItemDef { index: 206, name: "tm06"           },
    ItemDef { index: 207, name: "tm07"           },
    ItemDef { index: 208, name: "tm08"           },
    ItemDef { index: 209, name: "tm09"           },
    ItemDef { index: 210, name: "tm10"           },
    ItemDef { index: 211, name: "tm11"           },
    ItemDef { index: 212, name: "tm12"           },
    ItemDef { index: 213, name: "tm13"           },
    ItemDef { index: 214, name: "tm14"           },
    ItemDef { index: 215, name: "tm15"           },
    ItemDef { index: 216, name: "tm16"           },
    ItemDef { index: 217, name: "tm17"           },
    ItemDef { index: 218, name: "tm18"           },
    ItemDef { index: 219, name: "tm19"           },
    ItemDef { index: 220, name: "tm20"           },
    ItemDef { index: 221, name: "tm21"           },
    ItemDef { index: 222, name: "tm22"           },
    ItemDef { index: 223, name: "tm23"           },
    ItemDef { index: 224, name: "tm24"           },
    ItemDef { index: 225, name: "tm25"           },
    ItemDef { index: 226, name: "tm26"           },
    ItemDef { index: 227, name: "tm27"           },
    ItemDef { index: 228, name: "tm28"           },
    ItemDef { index: 229, name: "tm29"           },
    ItemDef { index: 230, name: "tm30"           },
    ItemDef { index: 231, name: "tm31"           },
    ItemDef { index: 232, name: "tm32"           },
    ItemDef { index: 233, name: "tm33"           },
    ItemDef { index: 234, name: "tm34"           },
    ItemDef { index: 235, name: "tm35"           },
    ItemDef { index: 236, name: "tm36"           },
    ItemDef { index: 237, name: "tm37"           },
    ItemDef { index: 238, name: "tm38"           },
    ItemDef { index: 239, name: "tm39"           },
    ItemDef { index: 240, name: "tm40"           },
    ItemDef { index: 241, name: "tm41"           },
    ItemDef { index: 242, name: "tm42"           },
    ItemDef { index: 243, name: "tm43"           },
    ItemDef { index: 244, name: "tm44"           },
    ItemDef { index: 245, name: "tm45"           },
    ItemDef { index: 246, name: "tm46"           },
    ItemDef { index: 247, name: "tm47"           },
    ItemDef { index: 248, name: "tm48"           },
    ItemDef { index: 249, name: "tm49"           },
    ItemDef { index: 250, name: "tm50"           },
    ItemDef { index: 251, name: "tm51"           },  // tm51-tm55 are glitch TMs
    ItemDef { index: 252, name: "tm52"           },
    ItemDef { index: 253, name: "tm53"           },
    ItemDef { index: 254, name: "tm54"           },
    ItemDef { index: 255, name: "tm55"           },
];
