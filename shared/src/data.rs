//! Static Seoul reference data: the ordered district ("gu") list and the
//! district → ordered sub-district ("dong") mapping. Ids are statistical-office
//! district codes and legal-dong codes; coordinates are the office locations
//! used for map re-centering. A few dongs carry no coordinate, in which case
//! selecting them leaves the map center unchanged.

use crate::district::{District, SubDistrict};
use crate::geo::LatLng;

const fn gu(id: &'static str, label: &'static str, lat: f64, lng: f64) -> District {
    District { id, label, lat, lng }
}

const fn dong(id: &'static str, label: &'static str, lat: f64, lng: f64) -> SubDistrict {
    SubDistrict {
        id,
        label,
        coord: Some(LatLng::new(lat, lng)),
    }
}

const fn dong_nc(id: &'static str, label: &'static str) -> SubDistrict {
    SubDistrict {
        id,
        label,
        coord: None,
    }
}

pub const SEOUL_GU: &[District] = &[
    gu("11110", "종로구", 37.573050, 126.979189),
    gu("11140", "중구", 37.563843, 126.997602),
    gu("11170", "용산구", 37.532600, 126.990860),
    gu("11200", "성동구", 37.563456, 127.036821),
    gu("11215", "광진구", 37.538484, 127.082385),
    gu("11230", "동대문구", 37.574368, 127.039580),
    gu("11260", "중랑구", 37.606320, 127.092924),
    gu("11290", "성북구", 37.589400, 127.016790),
    gu("11305", "강북구", 37.639750, 127.025490),
    gu("11320", "도봉구", 37.668770, 127.047200),
    gu("11350", "노원구", 37.654190, 127.056320),
    gu("11380", "은평구", 37.602780, 126.929160),
    gu("11410", "서대문구", 37.579120, 126.936800),
    gu("11440", "마포구", 37.566320, 126.901640),
    gu("11470", "양천구", 37.517020, 126.866440),
    gu("11500", "강서구", 37.550940, 126.849530),
    gu("11530", "구로구", 37.495470, 126.887360),
    gu("11545", "금천구", 37.456870, 126.895460),
    gu("11560", "영등포구", 37.526370, 126.896230),
    gu("11590", "동작구", 37.512410, 126.939400),
    gu("11620", "관악구", 37.478410, 126.951500),
    gu("11650", "서초구", 37.483570, 127.032660),
    gu("11680", "강남구", 37.517236, 127.047325),
    gu("11710", "송파구", 37.514540, 127.105860),
    gu("11740", "강동구", 37.530130, 127.123790),
];

pub const GU_DONG: &[(&str, &[SubDistrict])] = &[
    ("11110", &[
        dong("1111010100", "청운동", 37.586880, 126.969340),
        dong("1111011900", "사직동", 37.576010, 126.968800),
        dong("1111012400", "삼청동", 37.586080, 126.981840),
        dong("1111016700", "혜화동", 37.586240, 126.999940),
        dong_nc("1111017400", "창신동"),
    ]),
    ("11140", &[
        dong("1114010100", "소공동", 37.564650, 126.980050),
        dong("1114011500", "회현동", 37.558510, 126.978870),
        dong("1114012000", "명동", 37.560990, 126.985940),
        dong("1114013200", "필동", 37.558720, 126.993710),
        dong("1114017000", "신당동", 37.565570, 127.017790),
    ]),
    ("11170", &[
        dong("1117010100", "후암동", 37.548440, 126.978980),
        dong("1117011200", "이태원동", 37.534490, 126.994410),
        dong("1117011300", "한남동", 37.536390, 127.001980),
        dong("1117012800", "이촌동", 37.522270, 126.972550),
        dong_nc("1117013100", "서빙고동"),
    ]),
    ("11200", &[
        dong("1120010300", "왕십리동", 37.564860, 127.031970),
        dong("1120010500", "마장동", 37.566240, 127.042860),
        dong_nc("1120010600", "사근동"),
        dong("1120011000", "행당동", 37.557340, 127.029870),
        dong("1120011400", "성수동", 37.544580, 127.055910),
        dong("1120011900", "옥수동", 37.540810, 127.011790),
    ]),
    ("11215", &[
        dong("1121510100", "중곡동", 37.565790, 127.083830),
        dong("1121510200", "능동", 37.551790, 127.080920),
        dong("1121510300", "구의동", 37.543270, 127.086970),
        dong("1121510400", "광장동", 37.546550, 127.103490),
        dong("1121510500", "자양동", 37.534280, 127.068170),
        dong("1121510700", "화양동", 37.546110, 127.070420),
    ]),
    ("11230", &[
        dong("1123010100", "신설동", 37.575870, 127.023680),
        dong("1123010500", "전농동", 37.580500, 127.057870),
        dong("1123010600", "답십리동", 37.567590, 127.052500),
        dong("1123010700", "장안동", 37.571270, 127.067650),
        dong("1123010800", "이문동", 37.598190, 127.063250),
        dong("1123011000", "회기동", 37.589790, 127.057540),
    ]),
    ("11260", &[
        dong("1126010100", "면목동", 37.588610, 127.087500),
        dong("1126010200", "상봉동", 37.596780, 127.085690),
        dong("1126010300", "중화동", 37.602390, 127.079010),
        dong("1126010400", "묵동", 37.610710, 127.077460),
        dong("1126010500", "망우동", 37.599010, 127.104090),
        dong("1126010600", "신내동", 37.612870, 127.096720),
    ]),
    ("11290", &[
        dong("1129010100", "성북동", 37.590920, 126.997650),
        dong("1129010800", "돈암동", 37.596620, 127.020340),
        dong("1129011000", "안암동", 37.586180, 127.029010),
        dong("1129012600", "정릉동", 37.602890, 127.008460),
        dong("1129013500", "길음동", 37.604420, 127.024980),
        dong_nc("1129013800", "석관동"),
    ]),
    ("11305", &[
        dong("1130510100", "미아동", 37.626980, 127.026060),
        dong("1130510200", "번동", 37.638340, 127.034760),
        dong("1130510300", "수유동", 37.638050, 127.012400),
        dong("1130510400", "우이동", 37.661550, 127.011890),
    ]),
    ("11320", &[
        dong("1132010500", "쌍문동", 37.648640, 127.034410),
        dong("1132010600", "방학동", 37.666310, 127.037880),
        dong("1132010700", "창동", 37.653290, 127.047480),
        dong("1132010800", "도봉동", 37.681590, 127.044550),
    ]),
    ("11350", &[
        dong("1135010200", "공릉동", 37.625650, 127.072960),
        dong("1135010300", "하계동", 37.636300, 127.067860),
        dong("1135010500", "중계동", 37.645480, 127.064200),
        dong("1135010600", "상계동", 37.660590, 127.073100),
        dong("1135010700", "월계동", 37.617600, 127.058830),
    ]),
    ("11380", &[
        dong("1138010100", "수색동", 37.581470, 126.895600),
        dong("1138010300", "녹번동", 37.600870, 126.935740),
        dong("1138010400", "불광동", 37.610370, 126.929800),
        dong("1138010500", "갈현동", 37.615270, 126.912400),
        dong("1138010900", "응암동", 37.588430, 126.915850),
        dong("1138011400", "진관동", 37.638040, 126.922640),
    ]),
    ("11410", &[
        dong("1141010300", "천연동", 37.568690, 126.958920),
        dong("1141011500", "신촌동", 37.564280, 126.938910),
        dong("1141011800", "연희동", 37.569160, 126.930620),
        dong("1141012000", "홍제동", 37.589060, 126.943630),
        dong("1141012200", "북가좌동", 37.578290, 126.909980),
    ]),
    ("11440", &[
        dong("1144010100", "아현동", 37.557430, 126.956380),
        dong("1144010600", "공덕동", 37.544370, 126.951590),
        dong("1144011200", "도화동", 37.540390, 126.949600),
        dong("1144012000", "합정동", 37.549630, 126.913870),
        dong("1144012100", "망원동", 37.556100, 126.905940),
        dong("1144012400", "연남동", 37.562040, 126.921620),
        dong("1144018200", "상암동", 37.577390, 126.891480),
    ]),
    ("11470", &[
        dong("1147010100", "신정동", 37.516950, 126.852900),
        dong("1147010200", "목동", 37.530190, 126.874210),
        dong("1147010300", "신월동", 37.529020, 126.835650),
    ]),
    ("11500", &[
        dong("1150010100", "염창동", 37.551490, 126.874610),
        dong("1150010200", "등촌동", 37.553980, 126.858470),
        dong("1150010300", "화곡동", 37.541310, 126.840370),
        dong("1150010400", "가양동", 37.566320, 126.854660),
        dong("1150010800", "발산동", 37.558750, 126.837590),
        dong("1150011100", "방화동", 37.575930, 126.812780),
    ]),
    ("11530", &[
        dong("1153010100", "신도림동", 37.508940, 126.884940),
        dong("1153010200", "구로동", 37.495480, 126.887480),
        dong("1153010600", "고척동", 37.501590, 126.859180),
        dong("1153010700", "개봉동", 37.494070, 126.854950),
        dong("1153010800", "오류동", 37.491570, 126.839940),
    ]),
    ("11545", &[
        dong("1154510100", "가산동", 37.481640, 126.882640),
        dong("1154510200", "독산동", 37.466240, 126.895870),
        dong("1154510300", "시흥동", 37.450980, 126.903820),
    ]),
    ("11560", &[
        dong("1156010100", "영등포동", 37.520100, 126.907150),
        dong("1156011000", "여의도동", 37.521590, 126.924300),
        dong("1156011300", "당산동", 37.533800, 126.902830),
        dong("1156011800", "문래동", 37.517740, 126.895240),
        dong("1156013200", "신길동", 37.508640, 126.913430),
        dong("1156013400", "대림동", 37.493060, 126.899790),
    ]),
    ("11590", &[
        dong("1159010100", "노량진동", 37.513010, 126.942430),
        dong("1159010200", "상도동", 37.502630, 126.947740),
        dong("1159010700", "흑석동", 37.508600, 126.963400),
        dong("1159011000", "사당동", 37.486470, 126.973090),
        dong("1159011100", "대방동", 37.508980, 126.926240),
    ]),
    ("11620", &[
        dong("1162010100", "봉천동", 37.482450, 126.941620),
        dong("1162010200", "신림동", 37.466680, 126.930620),
        dong_nc("1162010300", "남현동"),
    ]),
    ("11650", &[
        dong("1165010100", "방배동", 37.481540, 126.997600),
        dong("1165010200", "양재동", 37.470300, 127.035280),
        dong("1165010700", "잠원동", 37.512570, 127.011430),
        dong("1165010800", "반포동", 37.503860, 127.011950),
        dong("1165011000", "서초동", 37.491680, 127.007910),
        dong("1165011100", "내곡동", 37.455900, 127.058970),
    ]),
    ("11680", &[
        dong("1168010100", "역삼동", 37.500730, 127.036420),
        dong("1168010300", "개포동", 37.481950, 127.061840),
        dong("1168010400", "청담동", 37.519480, 127.051790),
        dong("1168010500", "삼성동", 37.514000, 127.056160),
        dong("1168010600", "대치동", 37.499610, 127.062630),
        dong("1168010700", "신사동", 37.524390, 127.021210),
        dong("1168010800", "논현동", 37.511500, 127.029540),
        dong("1168011000", "압구정동", 37.528390, 127.032600),
        dong("1168011100", "세곡동", 37.466780, 127.103830),
        dong("1168011800", "도곡동", 37.490910, 127.045560),
    ]),
    ("11710", &[
        dong("1171010100", "잠실동", 37.513120, 127.086260),
        dong("1171010200", "신천동", 37.519740, 127.103010),
        dong("1171010400", "풍납동", 37.532710, 127.111890),
        dong("1171010500", "송파동", 37.506400, 127.110160),
        dong("1171010600", "석촌동", 37.503330, 127.106520),
        dong("1171010900", "가락동", 37.495160, 127.118630),
        dong("1171011000", "문정동", 37.485610, 127.121870),
        dong("1171011200", "방이동", 37.511170, 127.118290),
    ]),
    ("11740", &[
        dong("1174010100", "명일동", 37.551490, 127.143980),
        dong("1174010200", "고덕동", 37.560480, 127.154380),
        dong("1174010300", "상일동", 37.549840, 127.166480),
        dong("1174010500", "길동", 37.538240, 127.140040),
        dong("1174010600", "둔촌동", 37.527920, 127.136420),
        dong("1174010700", "암사동", 37.550130, 127.127740),
        dong("1174010800", "성내동", 37.531340, 127.127890),
        dong("1174011000", "천호동", 37.543980, 127.131110),
    ]),
];
